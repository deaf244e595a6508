use std::path::Path;
use std::process;
use clap::{Parser, Subcommand, ValueEnum};
use vsir::ircore::engine::Engine;
use vsir::ircore::matrix::TermDocMatrix;
use vsir::ircore::{DocId, RankingAlgorithm, Result};

#[derive(Parser)]
#[derive(Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
/// Term-at-a-time TF-IDF retrieval over a term-document matrix
struct Cli {
    #[clap(short, long, value_parser, global = true)]
    /// Matrix file (.yaml, .yml or .json), built-in example when omitted
    matrix: Option<String>,
    #[clap(short, long, value_parser, global = true)]
    /// Total number of documents, overrides the matrix file
    doc_count: Option<usize>,
    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[derive(Debug)]
enum Commands {
    /// Rank documents for the query terms
    Search {
        #[clap(value_parser, required = true)]
        /// query terms, repetitions allowed
        terms: Vec<String>,
        #[clap(short, long, value_enum, default_value = "taat")]
        /// scoring strategy
        ranking: Ranking,
        #[clap(short, long, value_parser)]
        /// show at most this many documents
        top: Option<usize>,
    },
    /// List indexed terms
    Terms,
    /// Show the postings of a term
    Postings {
        #[clap(value_parser)]
        term: String,
    },
    /// Show the inverse document frequency of a term
    Idf {
        #[clap(value_parser)]
        term: String,
    },
    /// Index statistics
    Stats,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
enum Ranking {
    /// term at a time
    Taat,
    /// document at a time
    Daat,
}

impl From<Ranking> for RankingAlgorithm {
    fn from(ranking: Ranking) -> Self {
        match ranking {
            Ranking::Taat => RankingAlgorithm::TermAtATime,
            Ranking::Daat => RankingAlgorithm::DocumentAtATime,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let engine = load_engine(cli)?;
    match &cli.command {
        Some(Commands::Search { terms, ranking, top }) =>
            command_search(&engine, terms, (*ranking).into(), *top)?,
        Some(Commands::Terms) => {
            for term in engine.terms() {
                println!("{}", term);
            }
        },
        Some(Commands::Postings { term }) => {
            for posting in engine.postings(term) {
                println!("D{}: {}", posting.get_doc_id() + 1, posting.get_term_frequency());
            }
        },
        Some(Commands::Idf { term }) => println!("{}", engine.idf(term)),
        Some(Commands::Stats) => command_stats(&engine),
        None => println!("index of {} documents loaded", engine.doc_count()),
    }
    Ok(())
}

fn load_engine(cli: &Cli) -> Result<Engine> {
    let mut matrix = match &cli.matrix {
        Some(path) => TermDocMatrix::load_from(Path::new(path))?,
        None => TermDocMatrix::sample().clone(),
    };
    if let Some(doc_count) = cli.doc_count {
        matrix = matrix.with_doc_count(doc_count);
    }
    Engine::build_from(&matrix)
}

fn command_search(engine: &Engine, terms: &[String], ranking: RankingAlgorithm, top: Option<usize>) -> Result<()> {
    let result = engine.exec_query(terms, ranking)?;
    for line in Engine::display(&result, top) {
        println!("{}", line);
    }
    Ok(())
}

fn command_stats(engine: &Engine) {
    let stats = engine.stats();
    println!("documents: {}", stats.document_count);
    println!("terms: {}", stats.term_count);
    println!("total document length: {}", stats.total_document_length);
    println!("average document length: {:.3}", stats.average_document_length);
    for (term, freq) in stats.term_freq {
        println!("{}\t{}", term, freq);
    }
    let index = engine.get_index();
    let norms = engine.get_document_norms();
    for doc in 0..engine.doc_count() as DocId {
        println!("D{}\tlength {}\tnorm {:.6}",
            doc + 1,
            index.get_document_length(doc).unwrap_or_default(),
            norms.get(doc).unwrap_or_default());
    }
}
