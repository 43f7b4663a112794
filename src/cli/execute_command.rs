use crate::cli::{Cli, Commands, parse_frame, parse_message};
use crate::crc_engine::{compute_crc, compute_crc_reference, shared_table};
use crate::frame_stream::{
    DEFAULT_READ_BUFFER_SIZE, seal_stream_with_capacity, verify_stream_with_capacity,
};
use crate::frame_validator::{encode_frame, is_valid};
use crate::utils::{format_hex, parse_buffer_size};
use castagnoli_frame_layout::constants::FRAME_SIZE;
use std::fmt::Display;
use std::fs::File;
use std::process;
use tracing::info;

/// Environment variable overriding the I/O buffer size of the file commands.
pub const READ_BUFFER_ENV: &str = "CRC_FRAME_READ_BUFFER";

/// Executes commands from the CLI against the CRC engine.
///
/// Results go to stdout. Errors go to stderr as `Error: ...` and end the
/// process with status 1. A frame that fails validation is not an error,
/// but `validate` and `verify-file` still exit with status 1 so scripts can
/// branch on corruption.
///
/// # References
/// - [`Commands`](crate::cli::Commands): Defines the available CLI commands.
/// - [`FrameValidator`](crate::FrameValidator): The validation logic used underneath.
pub fn execute_command(cli: &Cli) {
    match &cli.command {
        Commands::Crc { message, reference } => {
            let message = parse_message(message, cli.hex).unwrap_or_else(|err| exit_with_error(err));

            let crc = if *reference {
                compute_crc_reference(&message)
            } else {
                compute_crc(&message)
            };

            println!("{:#010x}", crc);
        }

        Commands::Seal { message } => {
            let message = parse_message(message, cli.hex).unwrap_or_else(|err| exit_with_error(err));
            println!("{}", format_hex(&encode_frame(&message)));
        }

        Commands::Validate { frame } => {
            let frame = parse_frame(frame).unwrap_or_else(|err| exit_with_error(err));

            if is_valid(&frame) {
                println!("VALID");
            } else {
                println!("INVALID");
                process::exit(1);
            }
        }

        Commands::Table => {
            for (row, chunk) in shared_table().entries().chunks(8).enumerate() {
                let line: Vec<String> = chunk.iter().map(|e| format!("{:#010x}", e)).collect();
                println!("{:#04x}: {}", row * 8, line.join(" "));
            }
        }

        Commands::SealFile { input, output } => {
            let capacity = read_buffer_size();
            let reader = File::open(input).unwrap_or_else(|err| {
                exit_with_error(format!("Failed to open {:?}: {}", input, err))
            });
            let writer = File::create(output).unwrap_or_else(|err| {
                exit_with_error(format!("Failed to create {:?}: {}", output, err))
            });

            match seal_stream_with_capacity(capacity, reader, writer) {
                Ok(count) => {
                    info!(frames = count, output = %output.display(), "Sealed file");
                    println!("Sealed {} message(s) into {:?}", count, output);
                }
                Err(err) => exit_with_error(err),
            }
        }

        Commands::VerifyFile { input } => {
            let capacity = read_buffer_size();
            let reader = File::open(input).unwrap_or_else(|err| {
                exit_with_error(format!("Failed to open {:?}: {}", input, err))
            });

            let report =
                verify_stream_with_capacity(capacity, reader).unwrap_or_else(|err| exit_with_error(err));

            println!("\n{:=^50}", " VERIFY SUMMARY ");
            println!("{:<25} {:?}", "FRAME FILE:", input);
            println!("{:-<50}", ""); // Separator

            println!("{:<25} {}", "TOTAL FRAMES:", report.total);
            println!("{:<25} {}", "VALID FRAMES:", report.valid_count());
            println!("{:<25} {}", "INVALID FRAMES:", report.invalid_count());
            if !report.is_clean() {
                let indices: Vec<String> = report.invalid.iter().map(u64::to_string).collect();
                println!("{:<25} {}", "INVALID INDICES:", indices.join(", "));
            }

            println!("{:=<50}", ""); // Footer

            if !report.is_clean() {
                process::exit(1);
            }
        }

        Commands::Demo => run_demo(),
    }
}

fn run_demo() {
    let message = *b"hiiamtom";
    let crc = compute_crc(&message);
    let frame = encode_frame(&message);

    let mut one_bit_flip = frame;
    one_bit_flip[0] ^= 0x0F;

    let mut all_bits_flip = frame;
    all_bits_flip.iter_mut().for_each(|b| *b ^= 0xFF);

    let mut half_bits_flip = frame;
    half_bits_flip[3..9].iter_mut().for_each(|b| *b ^= 0xFF);

    let scenarios: [(&str, [u8; FRAME_SIZE]); 5] = [
        ("correct transmission", frame),
        ("byte 0 XOR 0x0F", one_bit_flip),
        ("all bytes XOR 0xFF", all_bits_flip),
        ("bytes 3..9 XOR 0xFF", half_bits_flip),
        ("again correct", frame),
    ];

    println!("\n{:=^50}", " CRC-32C DEMO ");
    println!("{:<25} {:?}", "MESSAGE:", String::from_utf8_lossy(&message));
    println!("{:<25} {:#010x}", "CRC:", crc);
    println!("{:<25} {}", "FRAME:", format_hex(&frame));
    println!("{:-<50}", ""); // Separator

    for (label, candidate) in &scenarios {
        println!(
            "{:<25} {}",
            label,
            if is_valid(candidate) { "VALID" } else { "INVALID" }
        );
    }

    println!("{:=<50}", ""); // Footer
}

fn read_buffer_size() -> usize {
    match std::env::var(READ_BUFFER_ENV) {
        Ok(value) => parse_buffer_size(&value)
            .unwrap_or_else(|err| exit_with_error(format!("{}: {}", READ_BUFFER_ENV, err))),
        Err(_) => DEFAULT_READ_BUFFER_SIZE,
    }
}

fn exit_with_error(err: impl Display) -> ! {
    eprintln!("Error: {}", err);
    process::exit(1);
}
