use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "sysdump")]
#[command(about = "Print OS, hardware, network and GPU information for this machine")]
#[command(after_help = "Redirect stdout to keep a copy: sysdump > filename.txt")]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_no_arguments() {
        assert!(Cli::try_parse_from(["sysdump"]).is_ok());
    }

    #[test]
    fn rejects_unknown_arguments() {
        assert!(Cli::try_parse_from(["sysdump", "--format", "json"]).is_err());
    }
}
