use std::io::{self, Read, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use crypto_caesar::algos::cryptanalysis::break_cipher;
use crypto_caesar::config::ClientConfig;
use crypto_caesar::normalizer::normalize;
use crypto_caesar::utils::group_blocks;
use crypto_caesar::{Caesar, Decryptor, Encryptor, Language};

#[derive(Parser)]
#[command(version, about = "Caesar cipher: encrypt, decrypt, or break by frequency analysis")]
struct Cli {
    /// Alphabet and frequency table (russian|english); overrides CAESAR_LANGUAGE
    #[arg(long, short, global = true)]
    language: Option<Language>,
    /// Output group width, 0 to disable; overrides CAESAR_BLOCK_SIZE
    #[arg(long, global = true)]
    block_size: Option<usize>,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Shift every letter forward by the key
    Encrypt {
        #[arg(long, short, default_value_t = 3, allow_negative_numbers = true)]
        shift: i64,
        /// Text to process; read from stdin when omitted
        text: Option<String>,
    },
    /// Shift every letter back by the key
    Decrypt {
        #[arg(long, short, default_value_t = 4, allow_negative_numbers = true)]
        shift: i64,
        text: Option<String>,
    },
    /// Recover the key from ciphertext alone and decrypt it
    Break { text: Option<String> },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    if let Some(language) = cli.language {
        config.language = language;
    }
    if let Some(block_size) = cli.block_size {
        config.block_size = block_size;
    }

    let output = match cli.cmd {
        Cmd::Encrypt { shift, text } => {
            let text = read_input(text, &config)?;
            let caesar = Caesar::new(config.language, shift);
            tracing::info!(language = %config.language, shift = caesar.shift(), "encrypting");
            caesar.encrypt(&text)?
        }
        Cmd::Decrypt { shift, text } => {
            let text = read_input(text, &config)?;
            let caesar = Caesar::new(config.language, shift);
            tracing::info!(language = %config.language, shift = caesar.shift(), "decrypting");
            caesar.decrypt(&text)?
        }
        Cmd::Break { text } => {
            let text = read_input(text, &config)?;
            let alphabet = config.language.alphabet();
            let ciphertext = normalize(&text, alphabet);
            if ciphertext.is_empty() {
                tracing::warn!(language = %config.language, "no letters of the alphabet in input");
            }
            let cracked = break_cipher(&ciphertext, alphabet, config.language.frequencies())?;
            tracing::info!(
                language = %config.language,
                shift = cracked.shift,
                error = cracked.error,
                "recovered shift"
            );
            report_shift(&mut io::stderr(), cracked.shift)?;
            cracked.plaintext
        }
    };

    println!("{}", group_blocks(&output, config.block_size));
    Ok(())
}

fn read_input(text: Option<String>, config: &ClientConfig) -> Result<String> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    config.check_length(&text)?;
    Ok(text)
}

// Independent of the log filter.
fn report_shift<W: Write>(out: &mut W, shift: usize) -> io::Result<()> {
    writeln!(out, "shift: {}", shift)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
