use clap::{Parser, Subcommand};
use qr_format_bch::decoder::bch;
use qr_format_bch::decoder::format::FormatInfo;
use qr_format_bch::tools::{demo_seed_from_env, parse_word, run_demo};
use qr_format_bch::{ECLevel, Formatting, MaskPattern, RandomBitIndex, to_binary_string};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "bchtool", version, about = "QR format info BCH(15,5) tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode, flip one random bit, then decode
    Demo {
        #[arg(long, default_value = "M")]
        ecl: ECLevel,
        #[arg(long, default_value = "d")]
        mask: MaskPattern,
        /// Seed for the bit flip (falls back to BCH_DEMO_SEED)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the codeword for a level and mask
    Encode {
        #[arg(long)]
        ecl: ECLevel,
        #[arg(long)]
        mask: MaskPattern,
    },
    /// Check a 15-bit word against the generator
    Validate { word: String },
    /// Correct a 15-bit word to the nearest format info
    Decode { word: String },
    /// List all 32 codewords
    Table,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Demo { ecl, mask, seed } => demo_cmd(Formatting::new(ecl, mask), seed),
        Command::Encode { ecl, mask } => encode_cmd(Formatting::new(ecl, mask)),
        Command::Validate { word } => validate_cmd(&word),
        Command::Decode { word } => decode_cmd(&word),
        Command::Table => table_cmd(),
    }
}

fn demo_cmd(formatting: Formatting, seed: Option<u64>) -> ExitCode {
    let report = match seed.or_else(demo_seed_from_env) {
        Some(seed) => run_demo(formatting, &mut RandomBitIndex::seeded(seed)),
        None => run_demo(formatting, &mut RandomBitIndex::from_thread_rng()),
    };
    println!("{}", report);
    ExitCode::SUCCESS
}

fn encode_cmd(formatting: Formatting) -> ExitCode {
    let codeword = formatting.encode();
    println!(
        "ecl={:?} mask={:?} code={} codeword={} ({})",
        formatting.ecl,
        formatting.mask,
        formatting,
        to_binary_string(codeword, 15),
        codeword
    );
    ExitCode::SUCCESS
}

fn read_word(text: &str) -> Option<u16> {
    match parse_word(text) {
        Some(word) if word <= bch::CODEWORD_MASK => Some(word),
        _ => {
            eprintln!("Invalid 15-bit word: {}", text);
            None
        }
    }
}

fn validate_cmd(text: &str) -> ExitCode {
    let Some(word) = read_word(text) else {
        return ExitCode::FAILURE;
    };
    let valid = bch::is_valid(word);
    println!(
        "Is {} valid format code? {} (remainder {})",
        to_binary_string(word, 15),
        valid,
        to_binary_string(bch::remainder(word), 10)
    );
    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn decode_cmd(text: &str) -> ExitCode {
    let Some(word) = read_word(text) else {
        return ExitCode::FAILURE;
    };
    let result = bch::decode(word);
    println!("{}", result);
    match FormatInfo::decode(word) {
        Some(info) => {
            println!(
                "  ecl={:?} mask={:?} corrected_bits={}",
                info.ec_level, info.mask_pattern, info.corrected_bits
            );
            ExitCode::SUCCESS
        }
        None => ExitCode::FAILURE,
    }
}

fn table_cmd() -> ExitCode {
    for (message, &codeword) in bch::codewords().iter().enumerate() {
        let label = Formatting::from_code(message as u8)
            .map(|f| format!("{:?}/{:?}", f.ecl, f.mask).to_lowercase())
            .unwrap_or_default();
        println!(
            "{:05b}  {}  {:5}  {}",
            message,
            to_binary_string(codeword, 15),
            codeword,
            label
        );
    }
    ExitCode::SUCCESS
}
