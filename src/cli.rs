//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use igc_convert::corpus::Corpus;
use structopt::clap::AppSettings;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "igc-convert",
    about = "Convert IGC TEI files into JSON Lines.",
    global_settings = &[AppSettings::DisableVersion]
)]
/// Conversion parameters.
pub struct Convert {
    #[structopt(
        parse(from_os_str),
        short = "i",
        long = "input-path",
        help = "Folder containing the IGC-<Corpus>-<version>.TEI folders"
    )]
    pub input_path: PathBuf,

    #[structopt(short = "v", long = "version", default_value = "22.10", help = "IGC release")]
    pub version: String,

    #[structopt(
        short = "a",
        long = "all-corpora",
        conflicts_with = "corpus",
        help = "Convert every corpus"
    )]
    pub all_corpora: bool,

    #[structopt(
        short = "c",
        long = "corpus",
        required_unless = "all-corpora",
        help = "Corpus to convert (e.g. News1, IGC-Law)"
    )]
    pub corpus: Option<Corpus>,

    #[structopt(
        parse(from_os_str),
        short = "o",
        long = "output-path",
        default_value = "./output/",
        help = "Output folder"
    )]
    pub output_path: PathBuf,

    #[structopt(
        parse(from_os_str),
        long = "info-map",
        default_value = "./subcorpora_categorization.tsv",
        help = "Subcorpus categorization table"
    )]
    pub info_map: PathBuf,
}

impl Convert {
    /// Corpora selected for conversion.
    pub fn corpora(&self) -> Vec<Corpus> {
        if self.all_corpora {
            Corpus::ALL.to_vec()
        } else {
            self.corpus.into_iter().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_corpus() {
        let opt = Convert::from_iter_safe(&["igc-convert", "-i", "/data", "-c", "IGC-Law"]).unwrap();
        assert_eq!(opt.corpora(), vec![Corpus::Law]);
        assert_eq!(opt.version, "22.10");
        assert_eq!(opt.output_path, PathBuf::from("./output/"));
    }

    #[test]
    fn all_corpora() {
        let opt = Convert::from_iter_safe(&["igc-convert", "-i", "/data", "--all-corpora"]).unwrap();
        assert_eq!(opt.corpora(), Corpus::ALL.to_vec());
    }

    #[test]
    fn no_selection() {
        assert!(Convert::from_iter_safe(&["igc-convert", "-i", "/data"]).is_err());
    }

    #[test]
    fn both_selections() {
        assert!(Convert::from_iter_safe(&["igc-convert", "-i", "/data", "-a", "-c", "Law"]).is_err());
    }

    #[test]
    fn unknown_corpus() {
        assert!(Convert::from_iter_safe(&["igc-convert", "-i", "/data", "-c", "Blogs"]).is_err());
    }
}
