use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    #[clap(short, long)]
    pub config_path: Option<PathBuf>,
    /// Csv file with contract addresses; overrides `input.path`
    #[clap(short, long)]
    pub input: Option<PathBuf>,
    /// Overrides `output.contracts_path`
    #[clap(short, long)]
    pub output: Option<PathBuf>,
    /// Overrides `dispatcher.max_to_process`; `0` processes everything
    #[clap(short, long)]
    pub max_to_process: Option<usize>,
}

impl Args {
    pub fn apply(self, settings: &mut crate::Settings) {
        if let Some(input) = self.input {
            settings.input.path = input;
        }
        if let Some(output) = self.output {
            settings.output.contracts_path = output;
        }
        if let Some(max_to_process) = self.max_to_process {
            settings.dispatcher.max_to_process = max_to_process;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn flags_override_settings() {
        let args = Args::parse_from([
            "contracts-enricher",
            "--input",
            "labels.csv",
            "--max-to-process",
            "100",
        ]);
        let mut settings = crate::Settings::default();
        args.apply(&mut settings);

        assert_eq!(PathBuf::from("labels.csv"), settings.input.path);
        assert_eq!(100, settings.dispatcher.max_to_process);
        assert_eq!(
            PathBuf::from("processed_contracts.json"),
            settings.output.contracts_path
        );
    }
}
