use clap::{Parser, ValueEnum};

use randformula::alphabet::ExplicitAlphabet;
use randformula::generator::{FormulaGenerator, GeneratorConfig, NullaryPolicy, RandomSource};
use randformula::operator::Connective;

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Logic {
    /// ¬, ∧, ∨, →
    Base,
    /// Base plus □ and ◇.
    Modal,
    /// Base plus ⊤ and ⊥.
    Constants,
}

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Height of the generated formulas.
    #[arg(value_name = "INT", default_value = "3")]
    height: usize,

    /// Seed for the random generator (fresh entropy if omitted).
    #[clap(long, value_name = "INT")]
    seed: Option<u64>,

    /// Propositions to draw leaves from.
    #[clap(long, value_name = "ATOM", value_delimiter = ',', default_value = "p,q,r")]
    atoms: Vec<String>,

    /// Connectives to draw operators from.
    #[clap(long, value_enum, default_value = "base")]
    logic: Logic,

    /// Number of formulas to generate.
    #[clap(long, value_name = "INT", default_value = "1")]
    count: usize,

    /// Print each formula in DOT format.
    #[clap(long)]
    dot: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    println!("args = {:?}", args);

    let alphabet = ExplicitAlphabet::new(args.atoms);
    println!("alphabet = {}", alphabet);

    let (operators, nullary) = match args.logic {
        Logic::Base => (Connective::BASE.to_vec(), NullaryPolicy::Reject),
        Logic::Modal => (Connective::MODAL.to_vec(), NullaryPolicy::Reject),
        Logic::Constants => {
            let mut ops = Connective::BASE.to_vec();
            ops.extend([Connective::Top, Connective::Bottom]);
            (ops, NullaryPolicy::Allow)
        }
    };
    let generator = FormulaGenerator::new(GeneratorConfig::default().with_nullary(nullary));

    let space = generator.space_size(args.height, &alphabet, &operators)?;
    println!("{} distinct formulas of height {}", space, args.height);

    let mut rng = RandomSource::from(args.seed).into_rng();
    let formulas = generator.sample(args.count, args.height, &alphabet, &operators, &mut rng)?;
    for f in formulas.iter() {
        println!("- {} (height {}, size {})", f, f.height(), f.size());
        if args.dot {
            println!("{}", f.to_dot()?);
        }
    }

    Ok(())
}
