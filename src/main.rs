//! # igc-convert
//!
//! Converts IGC corpora from TEI XML into JSON Lines.
//! See the library documentation for details.
use igc_convert::corpus::InfoMap;
use igc_convert::error::Error;
use igc_convert::pipelines::igc::types::RecordAssembler;
use igc_convert::pipelines::igc::Report;
use igc_convert::pipelines::{IgcPipeline, Pipeline};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Convert::from_args();
    debug!("cli args\n{:#?}", opt);

    let corpora = opt.corpora();
    if corpora.is_empty() {
        return Err(Error::Custom("no corpus selected".to_string()));
    }

    let info = InfoMap::from_path(&opt.info_map)?;
    info!("loaded {} subcorpus categories from {:?}", info.len(), opt.info_map);

    // every record of the run shares the same fetch date
    let assembler = RecordAssembler::today();

    let mut report = Report::default();
    let mut failed_corpora = Vec::new();
    for corpus in corpora {
        let src = corpus.input_dir(&opt.input_path, &opt.version);
        let p = IgcPipeline::new(
            corpus,
            src,
            opt.output_path.clone(),
            opt.version.clone(),
            &info,
        )
        .with_assembler(assembler);

        match p.run() {
            Ok(r) => report.merge(r),
            Err(e) => {
                error!("{}: {}", corpus, e);
                failed_corpora.push(corpus);
            }
        }
    }

    info!(
        "done: {} documents written, {} failed",
        report.documents, report.failed_documents
    );

    if !failed_corpora.is_empty() || !report.is_complete() {
        return Err(Error::Custom(format!(
            "failed corpora: {:?}, failed subcorpora: {:?}",
            failed_corpora, report.failed_subcorpora
        )));
    }

    Ok(())
}
