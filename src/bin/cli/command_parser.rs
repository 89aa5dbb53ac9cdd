use clap::{Arg, Command};

pub fn arg_parser() -> Command {
    Command::new("local-library")
        .about("Library catalog: author list service")
        .subcommand_required(true)
        .subcommand(Command::new("serve").about("Serve the catalog over HTTP"))
        .subcommand(
            Command::new("add")
                .about("Add an author")
                .arg(
                    Arg::new("first-name")
                        .long("first-name")
                        .default_value(""),
                )
                .arg(
                    Arg::new("family-name")
                        .long("family-name")
                        .default_value(""),
                )
                .arg(
                    Arg::new("born")
                        .long("born")
                        .value_name("YYYY-MM-DD")
                        .help("Date of birth"),
                )
                .arg(
                    Arg::new("died")
                        .long("died")
                        .value_name("YYYY-MM-DD")
                        .help("Date of death"),
                ),
        )
        .subcommand(Command::new("list").about("Print all authors sorted by family name"))
        .subcommand(Command::new("config").about("Print the effective configuration"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add() {
        let matches = arg_parser()
            .try_get_matches_from([
                "local-library",
                "add",
                "--first-name",
                "Jane",
                "--family-name",
                "Austen",
                "--born",
                "1775-12-16",
            ])
            .unwrap();
        let (name, matches) = matches.subcommand().unwrap();
        assert_eq!(name, "add");
        assert_eq!(matches.get_one::<String>("first-name").unwrap(), "Jane");
        assert_eq!(matches.get_one::<String>("born").unwrap(), "1775-12-16");
        assert!(matches.get_one::<String>("died").is_none());
    }

    #[test]
    fn subcommand_required() {
        assert!(arg_parser().try_get_matches_from(["local-library"]).is_err());
    }
}
