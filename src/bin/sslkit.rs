//! The `sslkit` command-line front end: digests, Base64, DES/3DES, and RSA
//! key generation/inspection, dispatched from a single `clap` parser.

use clap::{Parser, Subcommand};
use sslkit::{base64, buffer, cipher, digest, error::Error, kdf, pem, progname, rsa};
use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

#[derive(Parser)]
#[command(name = "sslkit", bin_name = "sslkit", about = "A small command-line cryptographic toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Md5(DigestArgs),
    Sha224(DigestArgs),
    Sha256(DigestArgs),
    Sha384(DigestArgs),
    Sha512(DigestArgs),
    Whirlpool(DigestArgs),
    Base64(Base64Args),
    Des(CipherArgs),
    DesEcb(CipherArgs),
    DesCbc(CipherArgs),
    DesPcbc(CipherArgs),
    DesCfb(CipherArgs),
    DesOfb(CipherArgs),
    Des3(CipherArgs),
    Des3Ecb(CipherArgs),
    Des3Cbc(CipherArgs),
    Des3Pcbc(CipherArgs),
    Des3Cfb(CipherArgs),
    Des3Ofb(CipherArgs),
    Genrsa(GenrsaArgs),
    Rsa(RsaArgs),
}

#[derive(clap::Args)]
struct DigestArgs {
    files: Vec<PathBuf>,
}

#[derive(clap::Args)]
struct Base64Args {
    #[arg(short = 'e', long)]
    encode: bool,
    #[arg(short = 'd', long)]
    decode: bool,
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
struct CipherArgs {
    #[arg(short = 'e', long)]
    encrypt: bool,
    #[arg(short = 'd', long)]
    decrypt: bool,
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
    /// Hex-encoded key.
    #[arg(short = 'k', long)]
    key: Option<String>,
    /// Hex-encoded initialization vector.
    #[arg(long = "iv")]
    iv: Option<String>,
    /// Derive the key from a password via PBKDF2, instead of `-k`.
    #[arg(short = 'p', long)]
    password: Option<String>,
    #[arg(short = 's', long)]
    salt: Option<String>,
    /// Base64-wrap the ciphertext on encryption, or expect it on decryption.
    #[arg(short = 'a', long = "base64")]
    base64: bool,
    /// Print the resolved key/IV to stderr.
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(clap::Args)]
struct GenrsaArgs {
    #[arg(long = "out")]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
struct RsaArgs {
    #[arg(long = "in")]
    input: Option<PathBuf>,
    #[arg(long = "out")]
    output: Option<PathBuf>,
    #[arg(long)]
    pubin: bool,
    #[arg(long)]
    pubout: bool,
    #[arg(long)]
    text: bool,
    #[arg(long)]
    noout: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    progname::init("sslkit");
    let cli = Cli::parse();

    match cli.command {
        Command::Md5(args) => run_digest(digest::Algorithm::Md5, args),
        Command::Sha224(args) => run_digest(digest::Algorithm::Sha224, args),
        Command::Sha256(args) => run_digest(digest::Algorithm::Sha256, args),
        Command::Sha384(args) => run_digest(digest::Algorithm::Sha384, args),
        Command::Sha512(args) => run_digest(digest::Algorithm::Sha512, args),
        Command::Whirlpool(args) => run_digest(digest::Algorithm::Whirlpool, args),
        Command::Base64(args) => run_base64(args),
        Command::Des(args) => run_cipher(cipher::Mode::Ecb, false, args),
        Command::DesEcb(args) => run_cipher(cipher::Mode::Ecb, false, args),
        Command::DesCbc(args) => run_cipher(cipher::Mode::Cbc, false, args),
        Command::DesPcbc(args) => run_cipher(cipher::Mode::Pcbc, false, args),
        Command::DesCfb(args) => run_cipher(cipher::Mode::Cfb, false, args),
        Command::DesOfb(args) => run_cipher(cipher::Mode::Ofb, false, args),
        Command::Des3(args) => run_cipher(cipher::Mode::Ecb, true, args),
        Command::Des3Ecb(args) => run_cipher(cipher::Mode::Ecb, true, args),
        Command::Des3Cbc(args) => run_cipher(cipher::Mode::Cbc, true, args),
        Command::Des3Pcbc(args) => run_cipher(cipher::Mode::Pcbc, true, args),
        Command::Des3Cfb(args) => run_cipher(cipher::Mode::Cfb, true, args),
        Command::Des3Ofb(args) => run_cipher(cipher::Mode::Ofb, true, args),
        Command::Genrsa(args) => run_genrsa(args),
        Command::Rsa(args) => run_rsa(args),
    }
}

fn read_input(path: &Option<PathBuf>) -> io::Result<Vec<u8>> {
    match path {
        Some(p) => fs::read(p),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_output(path: &Option<PathBuf>, data: &[u8]) -> io::Result<()> {
    match path {
        Some(p) => fs::write(p, data),
        None => io::stdout().write_all(data),
    }
}

fn algo_name(algo: digest::Algorithm) -> &'static str {
    match algo {
        digest::Algorithm::Md5 => "MD5",
        digest::Algorithm::Sha224 => "SHA224",
        digest::Algorithm::Sha256 => "SHA256",
        digest::Algorithm::Sha384 => "SHA384",
        digest::Algorithm::Sha512 => "SHA512",
        digest::Algorithm::Whirlpool => "WHIRLPOOL",
    }
}

fn run_digest(algo: digest::Algorithm, args: DigestArgs) -> ExitCode {
    if args.files.is_empty() {
        let input = match read_input(&None) {
            Ok(d) => d,
            Err(e) => {
                progname::report(&e);
                return ExitCode::FAILURE;
            }
        };
        println!("{}", buffer::to_hex(&algo.hash(&input)));
        return ExitCode::SUCCESS;
    }

    let mut failed = false;
    for path in &args.files {
        match fs::read(path) {
            Ok(data) => {
                println!("{}({}) = {}", algo_name(algo), path.display(), buffer::to_hex(&algo.hash(&data)));
            }
            Err(e) => {
                progname::report(&e);
                failed = true;
            }
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run_base64(args: Base64Args) -> ExitCode {
    if args.encode && args.decode {
        progname::report(&"cannot encode and decode at the same time");
        return ExitCode::FAILURE;
    }

    let input = match read_input(&args.input) {
        Ok(d) => d,
        Err(e) => {
            progname::report(&e);
            return ExitCode::FAILURE;
        }
    };

    let result = if args.decode {
        let text = match std::str::from_utf8(&input) {
            Ok(t) => t,
            Err(_) => {
                progname::report(&"invalid input");
                return ExitCode::FAILURE;
            }
        };
        match base64::decode(text) {
            Ok(d) => d,
            Err(e) => {
                progname::report(&e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        base64::encode(&input).into_bytes()
    };

    if let Err(e) = write_output(&args.output, &result) {
        progname::report(&e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn resolve_key(args: &CipherArgs, triple: bool) -> Result<Vec<u8>, Error> {
    if let Some(hex) = &args.key {
        let bytes = buffer::from_hex(hex)?;
        let expected = if triple { 24 } else { 8 };
        if bytes.len() != expected {
            return Err(Error::BadKeyLength);
        }
        return Ok(bytes);
    }
    let password = args.password.clone().or_else(|| std::env::var("CRYPT_PASSWORD").ok());
    if let Some(password) = password {
        if triple {
            return Err(Error::UnsupportedAlgorithm);
        }
        let salt = args.salt.as_deref().unwrap_or("").as_bytes();
        return Ok(kdf::des_key_from_password(password.as_bytes(), salt).to_vec());
    }
    Err(Error::InvalidArgument("missing -k <key> or -p <password>".to_string()))
}

fn resolve_iv(args: &CipherArgs) -> Result<Option<[u8; 8]>, Error> {
    match &args.iv {
        Some(hex) => {
            let bytes = buffer::from_hex(hex)?;
            if bytes.len() != 8 {
                return Err(Error::BadIvLength);
            }
            let mut iv = [0u8; 8];
            iv.copy_from_slice(&bytes);
            Ok(Some(iv))
        }
        None => Ok(None),
    }
}

fn run_cipher(mode: cipher::Mode, triple: bool, args: CipherArgs) -> ExitCode {
    if args.encrypt && args.decrypt {
        progname::report(&"cannot encrypt and decrypt at the same time");
        return ExitCode::FAILURE;
    }
    let encrypting = !args.decrypt;

    let key_bytes = match resolve_key(&args, triple) {
        Ok(k) => k,
        Err(e) => {
            progname::report(&e);
            return ExitCode::FAILURE;
        }
    };
    let iv = match resolve_iv(&args) {
        Ok(iv) => iv,
        Err(e) => {
            progname::report(&e);
            return ExitCode::FAILURE;
        }
    };

    let variant = if triple {
        let mut key = [0u8; 24];
        key.copy_from_slice(&key_bytes);
        cipher::Variant::Des3(key)
    } else {
        let mut key = [0u8; 8];
        key.copy_from_slice(&key_bytes);
        cipher::Variant::Des(key)
    };

    if args.verbose {
        eprintln!("key={}", buffer::to_hex(&key_bytes));
        if let Some(iv) = iv {
            eprintln!("iv={}", buffer::to_hex(&iv));
        }
    }

    let opts = cipher::Options { mode, variant, iv };

    let input = match read_input(&args.input) {
        Ok(d) => d,
        Err(e) => {
            progname::report(&e);
            return ExitCode::FAILURE;
        }
    };

    let result = if encrypting {
        let ciphertext = match cipher::encrypt(&opts, &input) {
            Ok(c) => c,
            Err(e) => {
                progname::report(&e);
                return ExitCode::FAILURE;
            }
        };
        if args.base64 {
            base64::encode(&ciphertext).into_bytes()
        } else {
            ciphertext
        }
    } else {
        let raw = if args.base64 {
            let text = match std::str::from_utf8(&input) {
                Ok(t) => t,
                Err(_) => {
                    progname::report(&"invalid input");
                    return ExitCode::FAILURE;
                }
            };
            match base64::decode(text) {
                Ok(d) => d,
                Err(e) => {
                    progname::report(&e);
                    return ExitCode::FAILURE;
                }
            }
        } else {
            input
        };
        match cipher::decrypt(&opts, &raw) {
            Ok(p) => p,
            Err(e) => {
                progname::report(&e);
                return ExitCode::FAILURE;
            }
        }
    };

    if let Err(e) = write_output(&args.output, &result) {
        progname::report(&e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_genrsa(args: GenrsaArgs) -> ExitCode {
    let key = match rsa::generate() {
        Ok(k) => k,
        Err(e) => {
            progname::report(&e);
            return ExitCode::FAILURE;
        }
    };
    let der = rsa::der::encode_private_key_pkcs1(&key);
    let pem_text = pem::write(pem::KeyType::RsaPrivateKey, &der);
    if let Err(e) = write_output(&args.output, pem_text.as_bytes()) {
        progname::report(&e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_rsa(args: RsaArgs) -> ExitCode {
    let input = match read_input(&args.input) {
        Ok(d) => d,
        Err(e) => {
            progname::report(&e);
            return ExitCode::FAILURE;
        }
    };
    let input_str = match std::str::from_utf8(&input) {
        Ok(s) => s,
        Err(_) => {
            progname::report(&"invalid PEM input");
            return ExitCode::FAILURE;
        }
    };

    if args.pubin {
        let (key_type, der) = match pem::read_public_key(input_str) {
            Ok(v) => v,
            Err(e) => {
                progname::report(&e);
                return ExitCode::FAILURE;
            }
        };
        let key = match rsa::der::decode_public_key(key_type, &der) {
            Ok(k) => k,
            Err(e) => {
                progname::report(&e);
                return ExitCode::FAILURE;
            }
        };
        if args.text {
            print!("{}", rsa::print::public_key_text(&key));
        }
        if !args.noout {
            let out_der = rsa::der::encode_public_key_spki(&key);
            let pem_text = pem::write(pem::KeyType::PublicKey, &out_der);
            if let Err(e) = write_output(&args.output, pem_text.as_bytes()) {
                progname::report(&e);
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    let (key_type, der) = match pem::read_private_key(input_str) {
        Ok(v) => v,
        Err(e) => {
            progname::report(&e);
            return ExitCode::FAILURE;
        }
    };
    let key = match rsa::der::decode_private_key(key_type, &der) {
        Ok(k) => k,
        Err(e) => {
            progname::report(&e);
            return ExitCode::FAILURE;
        }
    };
    if args.text {
        print!("{}", rsa::print::private_key_text(&key));
    }
    if !args.noout {
        let (out_der, key_type_out) = if args.pubout {
            (rsa::der::encode_public_key_spki(&key.public_key()), pem::KeyType::PublicKey)
        } else {
            (rsa::der::encode_private_key_pkcs1(&key), pem::KeyType::RsaPrivateKey)
        };
        let pem_text = pem::write(key_type_out, &out_der);
        if let Err(e) = write_output(&args.output, pem_text.as_bytes()) {
            progname::report(&e);
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
