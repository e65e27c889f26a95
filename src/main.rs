use clap::{Args, Parser, Subcommand};
use cyphers::cli::{
    run_affine, run_caesar, run_scytale, run_substitution, show_info, AffineOptions,
    CaesarOptions, InfoOptions, ScytaleOptions, SubstitutionOptions,
};
use cyphers::{logging, CipherKind, CypherError, Mode};
use std::io::{self, BufWriter};
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("CYPHERS_VERSION");
const BUILD: &str = env!("CYPHERS_BUILD");
const PROFILE: &str = env!("CYPHERS_PROFILE");
const GIT_HASH: &str = env!("CYPHERS_GIT_HASH");

/// Exit status for a broken engine invariant (EX_SOFTWARE)
const EXIT_INTERNAL: u8 = 70;

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "cyphers")]
#[command(author, about = "Classical cipher stream filters (stdin to stdout)", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Exactly one of -e / -d
#[derive(Args)]
#[group(required = true, multiple = false)]
struct ModeArgs {
    /// Encrypt stdin to stdout
    #[arg(short, long)]
    encrypt: bool,

    /// Decrypt stdin to stdout
    #[arg(short, long)]
    decrypt: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Affine cipher over every byte: y = MUL * x + ADD mod 255
    #[command(alias = "a")]
    Affine {
        #[command(flatten)]
        mode: ModeArgs,

        /// Multiplier, where 2 <= MUL <= 255 and gcd(MUL, 255) = 1
        #[arg(short = 'm', long = "mul", value_name = "MUL", allow_negative_numbers = true)]
        multiplier: i64,

        /// Addition, where 0 <= ADD <= 255
        #[arg(short = 'a', long = "add", value_name = "ADD", allow_negative_numbers = true)]
        addend: i64,
    },

    /// Caesar shift cipher, line by line
    #[command(alias = "c")]
    Caesar {
        #[command(flatten)]
        mode: ModeArgs,

        /// The shift to apply, 1 to 25
        #[arg(short, long, allow_negative_numbers = true)]
        shift: i64,
    },

    /// Scytale transposition cipher, line by line
    #[command(alias = "s")]
    Scytale {
        #[command(flatten)]
        mode: ModeArgs,

        /// The width of the scytale, 1 to 127
        #[arg(short, long, allow_negative_numbers = true)]
        width: i64,
    },

    /// Substitution cipher with the built-in table
    #[command(alias = "u")]
    Substitution {
        #[command(flatten)]
        mode: ModeArgs,
    },

    /// Show the key material of a cipher
    #[command(alias = "i")]
    Info {
        /// Cipher to describe (affine, caesar, scytale, substitution)
        #[arg(value_parser = parse_cipher)]
        cipher: CipherKind,

        /// Affine multiplier
        #[arg(short = 'm', long = "mul", value_name = "MUL", allow_negative_numbers = true)]
        multiplier: Option<i64>,

        /// Affine addition
        #[arg(short = 'a', long = "add", value_name = "ADD", allow_negative_numbers = true)]
        addend: Option<i64>,

        /// Caesar shift
        #[arg(short, long, allow_negative_numbers = true)]
        shift: Option<i64>,

        /// Scytale width
        #[arg(short, long, allow_negative_numbers = true)]
        width: Option<i64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_cipher(s: &str) -> Result<CipherKind, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn mode(args: &ModeArgs) -> cyphers::Result<Mode> {
    Mode::from_flags(args.encrypt, args.decrypt)
}

fn run(command: Commands) -> cyphers::Result<()> {
    let stdin = io::stdin();
    let stdout = BufWriter::new(io::stdout().lock());

    match command {
        Commands::Affine {
            mode: flags,
            multiplier,
            addend,
        } => {
            let options = AffineOptions {
                mode: mode(&flags)?,
                multiplier,
                addend,
            };
            run_affine(stdin.lock(), stdout, &options)?;
        }

        Commands::Caesar { mode: flags, shift } => {
            let options = CaesarOptions {
                mode: mode(&flags)?,
                shift,
            };
            run_caesar(stdin.lock(), stdout, &options)?;
        }

        Commands::Scytale { mode: flags, width } => {
            let options = ScytaleOptions {
                mode: mode(&flags)?,
                width,
            };
            run_scytale(stdin.lock(), stdout, &options)?;
        }

        Commands::Substitution { mode: flags } => {
            let options = SubstitutionOptions {
                mode: mode(&flags)?,
                ..Default::default()
            };
            run_substitution(stdin.lock(), stdout, &options)?;
        }

        Commands::Info {
            cipher,
            multiplier,
            addend,
            shift,
            width,
            json,
        } => {
            let options = InfoOptions {
                cipher,
                multiplier,
                addend,
                shift,
                width,
                json,
            };
            print!("{}", show_info(&options)?);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.version {
        println!("cyphers {}", get_version());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn report(e: &CypherError) -> ExitCode {
    if e.is_internal() {
        log::error!("internal invariant violated: {}", e);
        eprintln!("Abort: {}", e);
        ExitCode::from(EXIT_INTERNAL)
    } else {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    }
}
