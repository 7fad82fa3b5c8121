//! RV32I execute-stage CLI.
//!
//! This binary exposes the execute-stage model from the command line. It performs:
//! 1. **Eval:** Evaluate one pipeline slot given every stage input as a flag.
//! 2. **Batch:** Evaluate a JSON Lines file of slots and report statistics.
//! 3. **Decode:** Show which ALU operation an instruction's fields dispatch to.

use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rv32ex_core::config::Config;
use rv32ex_core::core::pipeline::bypass::OperandSources;
use rv32ex_core::core::pipeline::stages::execute::{AluResult, ExecuteInputs, ExecuteStage};
use rv32ex_core::core::units::alu::control;
use rv32ex_core::isa::disasm::mnemonic;
use rv32ex_core::isa::instruction::InstructionFields;
use rv32ex_core::stats::ExecStats;

type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Parser, Debug)]
#[command(
    name = "rv32ex",
    author,
    version,
    about = "RV32I execute-stage model",
    long_about = "Evaluate the combinational execute stage of an RV32I pipeline: operand bypass selection followed by ALU dispatch.\n\nNumbers accept 0x/0b/0o prefixes and negative decimals (two's complement).\n\nExamples:\n  rv32ex eval --opcode 0b0010011 --funct3 0 --bypass2 2 --rs1 10 --imm 5\n  rv32ex batch slots.jsonl\n  rv32ex decode --word 0x40c58533"
)]
struct Cli {
    /// JSON configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a single pipeline slot.
    Eval(EvalArgs),

    /// Evaluate every slot in a JSON Lines file.
    Batch {
        /// Input file; one ExecuteInputs object per line.
        path: PathBuf,
    },

    /// Show the ALU operation selected by an instruction's fields.
    Decode(DecodeArgs),
}

#[derive(Args, Debug)]
struct EvalArgs {
    /// Major opcode (7 bits).
    #[arg(long, value_parser = parse_u32)]
    opcode: u32,

    /// funct3 (3 bits).
    #[arg(long, default_value = "0", value_parser = parse_u32)]
    funct3: u32,

    /// funct7 (7 bits).
    #[arg(long, default_value = "0", value_parser = parse_u32)]
    funct7: u32,

    /// Operand A selector: 0=rs1 1=fwd-ex 2=pc 3=fwd-mem.
    #[arg(long, default_value = "0", value_parser = parse_u8)]
    bypass1: u8,

    /// Operand B selector: 0=rs2 1=fwd-ex 2=imm 3=four 4=fwd-mem.
    #[arg(long, default_value = "0", value_parser = parse_u8)]
    bypass2: u8,

    /// Program counter.
    #[arg(long, default_value = "0", value_parser = parse_u32, allow_hyphen_values = true)]
    pc: u32,

    /// Register file value for rs1.
    #[arg(long, default_value = "0", value_parser = parse_u32, allow_hyphen_values = true)]
    rs1: u32,

    /// Register file value for rs2.
    #[arg(long, default_value = "0", value_parser = parse_u32, allow_hyphen_values = true)]
    rs2: u32,

    /// Decoded immediate.
    #[arg(long, default_value = "0", value_parser = parse_u32, allow_hyphen_values = true)]
    imm: u32,

    /// Operand A forwarded from execute.
    #[arg(long, default_value = "0", value_parser = parse_u32, allow_hyphen_values = true)]
    fwd_ex1: u32,

    /// Operand B forwarded from execute.
    #[arg(long, default_value = "0", value_parser = parse_u32, allow_hyphen_values = true)]
    fwd_ex2: u32,

    /// Operand A forwarded from memory.
    #[arg(long, default_value = "0", value_parser = parse_u32, allow_hyphen_values = true)]
    fwd_mem1: u32,

    /// Operand B forwarded from memory.
    #[arg(long, default_value = "0", value_parser = parse_u32, allow_hyphen_values = true)]
    fwd_mem2: u32,
}

#[derive(Args, Debug)]
struct DecodeArgs {
    /// Raw 32-bit instruction word.
    #[arg(long, value_parser = parse_u32, conflicts_with_all = ["opcode", "funct3", "funct7"])]
    word: Option<u32>,

    /// Major opcode (7 bits).
    #[arg(long, value_parser = parse_u32, required_unless_present = "word")]
    opcode: Option<u32>,

    /// funct3 (3 bits).
    #[arg(long, value_parser = parse_u32)]
    funct3: Option<u32>,

    /// funct7 (7 bits).
    #[arg(long, value_parser = parse_u32)]
    funct7: Option<u32>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    init_tracing(&config);

    match cli.command {
        Commands::Eval(args) => cmd_eval(&config, &args),
        Commands::Batch { path } => cmd_batch(&config, &path),
        Commands::Decode(args) => cmd_decode(&args),
    }
}

/// Installs the stderr subscriber; `RUST_LOG` wins over the config flag.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if config.general.trace_evaluations {
            "trace"
        } else {
            "warn"
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Evaluates one slot from command-line flags.
fn cmd_eval(config: &Config, args: &EvalArgs) -> CliResult<()> {
    let operands = OperandSources {
        program_counter: args.pc,
        rs1: args.rs1,
        rs2: args.rs2,
        immediate: args.imm,
        forward_ex1: args.fwd_ex1,
        forward_ex2: args.fwd_ex2,
        forward_mem1: args.fwd_mem1,
        forward_mem2: args.fwd_mem2,
    };
    let inputs = ExecuteInputs::from_raw(
        args.opcode,
        args.funct3,
        args.funct7,
        args.bypass1,
        args.bypass2,
        operands,
    )?;
    println!("{}", format_line(config, &inputs));
    Ok(())
}

/// Evaluates a JSON Lines file, one slot per line.
///
/// Blank lines and `#` comments are skipped. The first malformed line aborts
/// the run with its line number.
fn cmd_batch(config: &Config, path: &Path) -> CliResult<()> {
    let reader = BufReader::new(File::open(path)?);
    let mut stats = ExecStats::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let inputs: ExecuteInputs = serde_json::from_str(text)
            .map_err(|e| format!("{}:{}: {e}", path.display(), idx + 1))?;
        let eval = ExecuteStage::evaluate_detailed(&inputs);
        stats.record(&inputs, eval.op, eval.result);
        println!("{}", render(config, &inputs, eval.result));
    }

    tracing::info!(
        evaluations = stats.evaluations,
        undefined = stats.undefined,
        "batch complete"
    );
    if config.output.print_stats {
        stats.print();
    }
    Ok(())
}

/// Prints the dispatched operation without evaluating.
fn cmd_decode(args: &DecodeArgs) -> CliResult<()> {
    let fields = match args.word {
        Some(word) => InstructionFields::from_word(word),
        None => InstructionFields::new(
            args.opcode.unwrap_or_default(),
            args.funct3.unwrap_or_default(),
            args.funct7.unwrap_or_default(),
        )?,
    };
    println!(
        "opcode={:#09b} funct3={:#05b} funct7={:#09b} op={} mnemonic={}",
        fields.opcode,
        fields.funct3,
        fields.funct7,
        control::decode(&fields),
        mnemonic(&fields)
    );
    Ok(())
}

fn format_line(config: &Config, inputs: &ExecuteInputs) -> String {
    render(config, inputs, ExecuteStage::evaluate(inputs))
}

fn render(config: &Config, inputs: &ExecuteInputs, result: AluResult) -> String {
    let text = config.output.format.render(result);
    if config.output.show_mnemonic {
        format!("{text}  # {}", mnemonic(&inputs.fields))
    } else {
        text
    }
}

/// Parses a 32-bit value: `0x`, `0b`, `0o` prefixes, decimal, or a negative
/// decimal taken as two's complement. Underscores are ignored.
fn parse_u32(s: &str) -> Result<u32, String> {
    let cleaned: String = s.trim().chars().filter(|&c| c != '_').collect();
    let lower = cleaned.to_ascii_lowercase();
    let parsed = if let Some(hex) = lower.strip_prefix("0x") {
        u32::from_str_radix(hex, 16).map_err(|e| e.to_string())
    } else if let Some(bin) = lower.strip_prefix("0b") {
        u32::from_str_radix(bin, 2).map_err(|e| e.to_string())
    } else if let Some(oct) = lower.strip_prefix("0o") {
        u32::from_str_radix(oct, 8).map_err(|e| e.to_string())
    } else if lower.starts_with('-') {
        lower.parse::<i32>().map(|v| v as u32).map_err(|e| e.to_string())
    } else {
        lower.parse::<u32>().map_err(|e| e.to_string())
    };
    parsed.map_err(|e| format!("invalid number '{s}': {e}"))
}

/// Parses a raw selector value.
fn parse_u8(s: &str) -> Result<u8, String> {
    let v = parse_u32(s)?;
    u8::try_from(v).map_err(|_| format!("selector '{s}' does not fit in 8 bits"))
}
