use std::fmt::{Debug, Formatter};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

/// Arguments for the utilkit CLI
#[derive(Parser, Debug)]
#[command(version, about = "Small developer utilities")]
pub struct Args {
    /// Keep quiet and only log errors
    #[clap(short, long, global = true, conflicts_with = "verbose", default_value_t = false)]
    pub quiet: bool,

    #[clap(
        short = 'v',
        long,
        global = true,
        conflicts_with = "quiet",
        action = clap::ArgAction::Count,
        help = "Log more details; specify multiple times for more detail"
    )]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the current UTC timestamp, or the date and time of SECONDS since the epoch
    Timestamp {
        #[clap(value_name = "SECONDS", allow_negative_numbers = true)]
        seconds: Option<f64>,
    },

    /// Base64 encode INPUT, or decode it with --decode
    Base64 {
        #[clap(short, long)]
        decode: bool,

        /// Use the URL-safe alphabet
        #[clap(short, long)]
        url_safe: bool,

        /// Omit (or don't expect) '=' padding
        #[clap(long)]
        no_pad: bool,

        /// Print decoded bytes as a hexdump
        #[clap(long, requires = "decode")]
        dump: bool,

        input: String,
    },

    /// Hex encode INPUT, or decode it with --decode
    Hex {
        #[clap(short, long)]
        decode: bool,

        /// Print decoded bytes as a hexdump
        #[clap(long, requires = "decode")]
        dump: bool,

        input: String,
    },

    /// Normalize mainland China mobile numbers
    Phone {
        #[clap(required = true, value_name = "NUMBER")]
        numbers: Vec<String>,
    },

    /// Generate a 2048-bit RSA key pair as PEM
    RsaKeygen {
        #[clap(flatten)]
        keygen: KeygenArgs,
    },

    /// Upload a file as multipart/form-data
    Upload {
        url: String,

        path: PathBuf,

        /// Filename sent in the form; defaults to the file's own name
        #[clap(long)]
        filename: Option<String>,

        #[clap(flatten)]
        http: HttpArgs,
    },

    /// GET a URL and print the response body
    Get {
        url: String,

        #[clap(flatten)]
        http: HttpArgs,
    },
}

#[derive(clap::Args, Clone)]
pub struct KeygenArgs {
    /// Write private.pem and public.pem to this directory instead of stdout
    #[clap(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Encrypt the private key with this password
    #[clap(
        long,
        value_name = "PASSWORD",
        env = "UTILKIT_KEY_PASSWORD",
        hide_env_values = true
    )]
    pub password: Option<String>,
}

impl Debug for KeygenArgs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeygenArgs")
            .field("out_dir", &self.out_dir)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(clap::Args, Clone)]
pub struct HttpArgs {
    /// Prepended to every URL
    #[clap(long, value_name = "URL", env = "UTILKIT_URL_PREFIX")]
    pub url_prefix: Option<String>,

    /// OAuth2 bearer token
    #[clap(long, value_name = "TOKEN", env = "UTILKIT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds; 0 waits forever
    #[clap(
        long,
        value_name = "SECONDS",
        env = "UTILKIT_TIMEOUT",
        default_value_t = 30
    )]
    pub timeout: u64,
}

impl HttpArgs {
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

impl Debug for HttpArgs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpArgs")
            .field("url_prefix", &self.url_prefix)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn verbosity_flags() {
        let args = Args::try_parse_from(["utilkit", "-vv", "timestamp"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert!(!args.quiet);

        let args = Args::try_parse_from(["utilkit", "phone", "-q", "17718809932"]).unwrap();
        assert!(args.quiet);

        assert!(Args::try_parse_from(["utilkit", "-q", "-v", "timestamp"]).is_err());
    }

    #[test]
    fn negative_timestamp() {
        let args = Args::try_parse_from(["utilkit", "timestamp", "-1.5"]).unwrap();
        assert!(matches!(args.command, Command::Timestamp { seconds: Some(s) } if s == -1.5));
    }

    #[test]
    fn dump_requires_decode() {
        assert!(Args::try_parse_from(["utilkit", "hex", "--dump", "00"]).is_err());
        assert!(Args::try_parse_from(["utilkit", "hex", "-d", "--dump", "00"]).is_ok());
    }

    #[test]
    fn keygen_password_is_redacted() {
        let args = Args::try_parse_from([
            "utilkit",
            "rsa-keygen",
            "--out-dir",
            "keys",
            "--password",
            "hunter2",
        ])
        .unwrap();

        assert!(!format!("{args:?}").contains("hunter2"));
        let Command::RsaKeygen { keygen } = args.command else {
            panic!("expected rsa-keygen");
        };
        assert_eq!(keygen.out_dir, Some(PathBuf::from("keys")));
        assert_eq!(keygen.password.as_deref(), Some("hunter2"));
    }

    #[test]
    fn http_flags() {
        let args = Args::try_parse_from([
            "utilkit",
            "get",
            "/user",
            "--url-prefix",
            "http://localhost/api",
            "--token",
            "secret",
            "--timeout",
            "0",
        ])
        .unwrap();

        let Command::Get { url, http } = args.command else {
            panic!("expected get");
        };
        assert_eq!(url, "/user");
        assert_eq!(http.url_prefix.as_deref(), Some("http://localhost/api"));
        assert_eq!(http.timeout(), None);
        assert!(!format!("{http:?}").contains("secret"));
    }
}
