use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context as EContext;
use clap::Parser;
use http::Uri;
use vote_client::ballot_input::BallotForm;
use vote_client::cast_vote::{cast_vote, status_text};
use vote_client::vote_submitter::VoteSubmitter;
use zeroize::Zeroizing;

#[derive(Parser)]
#[command(name = "cast-vote")]
#[command(about = "Sign a ballot with your private key and submit it", long_about = None)]
struct Cli {
    /// Your voter id (base64 public key)
    #[arg(long, env = "VOTER_ID", default_value = "")]
    voter_id: String,

    /// The ballot option to vote for
    #[arg(long, env = "VOTE_VALUE", default_value = "")]
    vote: String,

    /// Comma separated ballot options; the vote must be one of them
    #[arg(long, value_delimiter = ',')]
    choices: Vec<String>,

    /// Read the base64 PKCS#8 private key from this file instead of
    /// VOTER_PRIVATE_KEY or the prompt
    #[arg(long)]
    key_file: Option<PathBuf>,

    /// Base URL of the vote server
    #[arg(long, env = "VOTE_SERVER_URL", default_value = "http://localhost:8080")]
    server: Uri,
}

fn read_private_key(key_file: Option<&PathBuf>) -> anyhow::Result<Zeroizing<String>> {
    if let Some(path) = key_file {
        return Ok(Zeroizing::new(
            read_to_string(path).with_context(|| format!("Reading key file {}", path.display()))?,
        ));
    }
    if let Ok(key) = std::env::var("VOTER_PRIVATE_KEY") {
        return Ok(Zeroizing::new(key));
    }
    Ok(Zeroizing::new(
        rpassword::prompt_password("Private key (base64 PKCS#8): ")
            .context("Prompting for private key")?,
    ))
}

fn key_file_unreadable_status(path: &Path) -> String {
    format!("Could not read key file {}", path.display())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_default_env().init();

    let cli = Cli::parse();

    let private_key = match read_private_key(cli.key_file.as_ref()) {
        Ok(key) => key,
        Err(e) => {
            log::error!("{e:#}");
            match &cli.key_file {
                Some(path) => {
                    println!("{}", key_file_unreadable_status(path));
                    return ExitCode::FAILURE;
                }
                // No terminal to prompt on; same as leaving the field empty.
                None => Zeroizing::new(String::new()),
            }
        }
    };

    let form = BallotForm::new(&cli.voter_id, &cli.vote, private_key).with_choices(cli.choices);
    let submitter = VoteSubmitter::new(cli.server);

    let outcome = cast_vote(form, &submitter).await;
    println!("{}", status_text(&outcome));

    if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use tempfile::Builder;
    use vote_client::private_key::decode_private_key;

    use super::*;

    const ALICE_KEY: &str = include_str!("../../../testdata/alice.pk8.b64");

    #[test]
    fn missing_key_file_names_the_path() {
        let tmpdir = Builder::new().tempdir().unwrap();
        let path = tmpdir.path().join("missing.b64");

        let err = read_private_key(Some(&path)).err().expect("File doesn't exist");
        assert!(format!("{err:#}").contains("Reading key file"));
        assert_eq!(
            key_file_unreadable_status(&path),
            format!("Could not read key file {}", path.display())
        );
    }

    #[test]
    fn wrapped_key_file_decodes() {
        let tmpdir = Builder::new().tempdir().unwrap();
        let path = tmpdir.path().join("voter.b64");
        let wrapped: Vec<&str> = ALICE_KEY
            .trim()
            .as_bytes()
            .chunks(76)
            .map(|line| std::str::from_utf8(line).unwrap())
            .collect();
        write(&path, wrapped.join("\n") + "\n").unwrap();

        let key = read_private_key(Some(&path)).unwrap();
        decode_private_key(&key).expect("Wrapped key file should decode");
    }
}
