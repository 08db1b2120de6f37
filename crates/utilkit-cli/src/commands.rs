use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::Path;

use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};
use tracing::{debug, info, warn};
use utilkit_common::Base64;
use utilkit_common::encoding::hexdump;
use utilkit_crypto::RsaPrivate;
use utilkit_http::{OAuth2, Session, Source};

use crate::CliError;
use crate::args::{Command, HttpArgs, KeygenArgs};

/// Run `command`, returning what to write to stdout.
pub fn run(command: &Command) -> Result<Vec<u8>, CliError> {
    match command {
        Command::Timestamp { seconds } => timestamp(*seconds),
        Command::Base64 {
            decode,
            url_safe,
            no_pad,
            dump,
            input,
        } => {
            let alphabet = if *url_safe {
                Base64::UrlSafe
            } else {
                Base64::Standard
            };
            if *decode {
                decoded(alphabet.decode(input.trim(), !no_pad)?, *dump)
            } else {
                Ok(line(alphabet.encode(input.as_bytes(), !no_pad)))
            }
        }
        Command::Hex {
            decode,
            dump,
            input,
        } => {
            if *decode {
                decoded(HEXLOWER_PERMISSIVE.decode(input.trim().as_bytes())?, *dump)
            } else {
                Ok(line(HEXLOWER.encode(input.as_bytes())))
            }
        }
        Command::Phone { numbers } => Ok(phone(numbers).into_bytes()),
        Command::RsaKeygen { keygen } => rsa_keygen(keygen),
        Command::Upload {
            url,
            path,
            filename,
            http,
        } => {
            let response = session(http).upload(url, Source::Path(path), filename.as_deref())?;
            body_or_status(response)
        }
        Command::Get { url, http } => body_or_status(session(http).get(url)?),
    }
}

fn line(mut text: String) -> Vec<u8> {
    text.push('\n');
    text.into_bytes()
}

fn decoded(bytes: Vec<u8>, dump: bool) -> Result<Vec<u8>, CliError> {
    if !dump {
        return Ok(bytes);
    }
    let mut out = Vec::new();
    hexdump(&bytes, &mut out)?;
    Ok(out)
}

fn timestamp(seconds: Option<f64>) -> Result<Vec<u8>, CliError> {
    match seconds {
        None => Ok(line(format!("{:.6}", utilkit_time::utc_timestamp()))),
        Some(secs) => Ok(line(utilkit_time::from_utc_timestamp(secs)?.to_string())),
    }
}

fn phone(numbers: &[String]) -> String {
    let mut out = String::new();
    for number in numbers {
        match utilkit_extras::parse_phone(number) {
            Some(national) => {
                let _ = writeln!(out, "{number}\t{national}");
            }
            None => {
                warn!("not a mainland mobile number: {number}");
                let _ = writeln!(out, "{number}\t-");
            }
        }
    }
    out
}

fn rsa_keygen(keygen: &KeygenArgs) -> Result<Vec<u8>, CliError> {
    let password = keygen.password.as_deref().map(str::as_bytes);
    let (private, public) = RsaPrivate::generate_key(password)?;

    let Some(dir) = &keygen.out_dir else {
        return Ok(format!("{private}{public}").into_bytes());
    };

    let private_path = dir.join("private.pem");
    let public_path = dir.join("public.pem");
    write_private(&private_path, &private)?;
    std::fs::write(&public_path, public)?;
    info!(
        "wrote {} and {}",
        private_path.display(),
        public_path.display()
    );
    Ok(Vec::new())
}

/// Create `path` readable only by its owner. An existing file is an error and is left as is.
fn write_private(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path)?.write_all(contents.as_bytes())
}

fn session(http: &HttpArgs) -> Session {
    let mut session = match &http.url_prefix {
        Some(prefix) => Session::with_prefix(prefix),
        None => Session::new(),
    };
    session = session.timeout(http.timeout());
    if let Some(token) = &http.token {
        session = session.auth(OAuth2::new(token));
    }
    debug!("{session:?}");
    session
}

fn body_or_status(response: utilkit_http::Response) -> Result<Vec<u8>, CliError> {
    info!(status = response.status(), "response received");
    if !response.is_success() {
        return Err(CliError::Status(response.status(), response.text().into_owned()));
    }
    Ok(response.body().to_vec())
}
