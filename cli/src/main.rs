//! Hill cipher key-pair generator.
//!
//! Draws a random invertible matrix over Z/26Z together with its modular
//! inverse, writes both to binary key files, then reads them back and prints
//! them for inspection.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use hill_crypto::codec;
use hill_crypto::keypair::keys::{
    KeyPair, MAX_ORDER, MAX_SYNTHESIS_ATTEMPTS, MIN_ORDER, synthesize_with_limit,
};
use hill_crypto::ring::Matrix;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(name = "hill-keygen")]
#[command(about = "Generate a Hill cipher encryption/decryption key pair")]
#[command(version)]
struct Cli {
    /// Output file for the encryption key
    encrypt_key_file: PathBuf,

    /// Output file for the decryption key
    decrypt_key_file: PathBuf,

    /// Matrix order to use instead of drawing one at random from [2, 9]
    #[arg(short = 'n', long)]
    order: Option<usize>,

    /// Seed for reproducible key generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Cap on rejected candidates before generation gives up
    #[arg(long, default_value_t = MAX_SYNTHESIS_ATTEMPTS)]
    max_attempts: usize,
}

fn generate_pair(cli: &Cli) -> anyhow::Result<KeyPair> {
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let order = match cli.order {
        Some(order) => order,
        None => rng.random_range(MIN_ORDER..=MAX_ORDER),
    };

    let pair = synthesize_with_limit(order, cli.max_attempts, &mut rng)
        .context("key generation failed")?;
    Ok(pair)
}

fn render_matrix(matrix: &Matrix) -> String {
    matrix
        .iter()
        .map(|row| {
            row.iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> anyhow::Result<()> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    let cli = Cli::parse();

    println!("Generating encryption/decryption key pair...");
    let pair = generate_pair(&cli)?;
    log::info!("Synthesized key pair of order {}", pair.order);

    println!(
        "Writing encryption key to '{}'...",
        cli.encrypt_key_file.display()
    );
    codec::write_key(&cli.encrypt_key_file, &pair.encrypt_key).with_context(|| {
        format!(
            "could not write encryption key to '{}'",
            cli.encrypt_key_file.display()
        )
    })?;

    println!(
        "Writing decryption key to '{}'...",
        cli.decrypt_key_file.display()
    );
    codec::write_key(&cli.decrypt_key_file, &pair.decrypt_key).with_context(|| {
        format!(
            "could not write decryption key to '{}'",
            cli.decrypt_key_file.display()
        )
    })?;

    // Read both keys back through the codec so a broken write surfaces here
    // rather than at first use.
    let encrypt_key = codec::read_key(&cli.encrypt_key_file).with_context(|| {
        format!(
            "could not read back encryption key from '{}'",
            cli.encrypt_key_file.display()
        )
    })?;
    println!(
        "\nEncryption key ['{}']:\n{}",
        cli.encrypt_key_file.display(),
        render_matrix(&encrypt_key)
    );

    let decrypt_key = codec::read_key(&cli.decrypt_key_file).with_context(|| {
        format!(
            "could not read back decryption key from '{}'",
            cli.decrypt_key_file.display()
        )
    })?;
    println!(
        "\nDecryption key ['{}']:\n{}",
        cli.decrypt_key_file.display(),
        render_matrix(&decrypt_key)
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_matrix_is_tab_separated() {
        let matrix = vec![vec![3, 3], vec![2, 5]];
        assert_eq!(render_matrix(&matrix), "3\t3\n2\t5");
    }

    #[test]
    fn cli_parses_two_positional_arguments() {
        let cli = Cli::parse_from(["hill-keygen", "enc.key", "dec.key"]);
        assert_eq!(cli.encrypt_key_file, PathBuf::from("enc.key"));
        assert_eq!(cli.decrypt_key_file, PathBuf::from("dec.key"));
        assert_eq!(cli.order, None);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.max_attempts, MAX_SYNTHESIS_ATTEMPTS);
    }

    #[test]
    fn cli_rejects_missing_arguments() {
        assert!(Cli::try_parse_from(["hill-keygen", "only-one.key"]).is_err());
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let cli = Cli::parse_from(["hill-keygen", "enc.key", "dec.key", "--seed", "4242"]);
        let first = generate_pair(&cli).unwrap();
        let second = generate_pair(&cli).unwrap();
        assert_eq!(first, second);
    }
}
