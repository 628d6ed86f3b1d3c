//! jseal Command Line Tool
//!
//! Provides commands for signing and verifying JSON documents:
//! - sign: produce a signed artifact (append or package)
//! - signature: print the detached signature
//! - verify: check an embedded or detached signature
//! - canonicalize: print the canonical form fed to the digest

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use jseal_canonical::canonical_bytes_of;
use jseal_core::{JsonSigner, Strategy, DEFAULT_PACKAGE_FIELD, DEFAULT_SIGNATURE_FIELD};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jseal")]
#[command(version)]
#[command(about = "Sign and verify JSON documents with keyed digests")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign a JSON file
    #[command(about = "Sign a JSON file and print the signed artifact")]
    Sign {
        /// Path to the JSON file to sign
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        options: SignerOptions,
    },

    /// Print the detached signature of a JSON file
    #[command(about = "Compute the detached signature without packaging")]
    Signature {
        /// Path to the JSON file to sign
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Secret signing key
        #[arg(long, short, default_value = "")]
        key: String,

        /// Digest algorithm
        #[arg(long, default_value = jseal_canonical::DEFAULT_ALGORITHM)]
        algorithm: String,

        /// Field the signature is stored under
        #[arg(long, default_value = DEFAULT_SIGNATURE_FIELD)]
        signature_field: String,
    },

    /// Verify a signed JSON file
    #[command(about = "Verify an embedded or detached signature")]
    Verify {
        /// Path to the signed JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Detached signature to check instead of the embedded field
        #[arg(long, value_name = "HEX")]
        signature: Option<String>,

        #[command(flatten)]
        options: SignerOptions,
    },

    /// Print the canonical form of a JSON file
    #[command(about = "Print the canonical bytes fed to the digest")]
    Canonicalize {
        /// Path to the JSON file to canonicalize
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Field to strip before canonicalizing
        #[arg(long, default_value = DEFAULT_SIGNATURE_FIELD)]
        signature_field: String,
    },
}

#[derive(Args)]
struct SignerOptions {
    /// Wrap the original document instead of appending the signature
    #[arg(long)]
    package: bool,

    /// Secret signing key
    #[arg(long, short, default_value = "")]
    key: String,

    /// Digest algorithm
    #[arg(long, default_value = jseal_canonical::DEFAULT_ALGORITHM)]
    algorithm: String,

    /// Field the signature is stored under
    #[arg(long, default_value = DEFAULT_SIGNATURE_FIELD)]
    signature_field: String,

    /// Field the original document is wrapped under (package only)
    #[arg(long, default_value = DEFAULT_PACKAGE_FIELD)]
    package_field: String,
}

impl SignerOptions {
    fn build(&self) -> JsonSigner {
        let strategy = if self.package {
            Strategy::Package
        } else {
            Strategy::Append
        };

        let mut signer = JsonSigner::new(strategy);
        signer.set_signing_key(&self.key);
        signer.set_algorithm(&self.algorithm);
        signer.set_signature_field(&self.signature_field);
        signer.set_package_field(&self.package_field);
        signer
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sign { file, options } => handle_sign(&file, &options),
        Commands::Signature {
            file,
            key,
            algorithm,
            signature_field,
        } => handle_signature(&file, &key, &algorithm, &signature_field),
        Commands::Verify {
            file,
            signature,
            options,
        } => handle_verify(&file, signature.as_deref(), &options),
        Commands::Canonicalize {
            file,
            signature_field,
        } => handle_canonicalize(&file, &signature_field),
    }
}

fn read_json(file: &PathBuf) -> Result<String> {
    std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))
}

fn handle_sign(file: &PathBuf, options: &SignerOptions) -> Result<()> {
    let json = read_json(file)?;

    let signed = options
        .build()
        .sign(&json)
        .with_context(|| format!("Failed to sign {}", file.display()))?;

    println!("{}", signed);

    Ok(())
}

fn handle_signature(file: &PathBuf, key: &str, algorithm: &str, signature_field: &str) -> Result<()> {
    let json = read_json(file)?;

    let mut signer = JsonSigner::default();
    signer.set_signing_key(key);
    signer.set_algorithm(algorithm);
    signer.set_signature_field(signature_field);

    let signature = signer
        .signature(&json)
        .with_context(|| format!("Failed to compute signature for {}", file.display()))?;

    println!("{}", signature);

    Ok(())
}

fn handle_verify(file: &PathBuf, signature: Option<&str>, options: &SignerOptions) -> Result<()> {
    let json = read_json(file)?;

    let verified = options
        .build()
        .verify(&json, signature)
        .with_context(|| format!("Failed to verify {}", file.display()))?;

    if !verified {
        bail!("Signature mismatch");
    }

    println!("Signature verified");

    Ok(())
}

fn handle_canonicalize(file: &PathBuf, signature_field: &str) -> Result<()> {
    let json = read_json(file)?;

    let value: serde_json::Value = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse {} as JSON", file.display()))?;

    let canonical = canonical_bytes_of(&value, signature_field)
        .with_context(|| "Failed to generate canonical JSON")?;

    std::io::stdout()
        .write_all(&canonical)
        .with_context(|| "Failed to write output")?;

    Ok(())
}
