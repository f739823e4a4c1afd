use std::ffi::OsString;

use peoplepick::app::App;
use peoplepick::error::{AppError, AppResult};
use peoplepick::person::Directory;

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let dataset_path = parse_cli_dataset(std::env::args_os())?;

    let directory = match dataset_path {
        Some(path) => Directory::load_from_path(path)?,
        None => Directory::builtin()?,
    };
    let mut app = App::new(directory)?;

    app.run().await
}

fn parse_cli_dataset<I>(mut args: I) -> AppResult<Option<OsString>>
where
    I: Iterator<Item = OsString>,
{
    let _program = args.next();
    let Some(path) = args.next() else {
        return Ok(None);
    };

    if args.next().is_some() {
        return Err(AppError::invalid_argument(
            "usage: peoplepick [people.json] (at most one dataset argument)",
        ));
    }

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::parse_cli_dataset;

    #[test]
    fn parse_cli_dataset_defaults_to_builtin_without_args() {
        let args = vec![OsString::from("peoplepick")];
        let path = parse_cli_dataset(args.into_iter()).expect("no args should parse");
        assert_eq!(path, None);
    }

    #[test]
    fn parse_cli_dataset_accepts_a_single_path() {
        let args = vec![OsString::from("peoplepick"), OsString::from("people.json")];
        let path = parse_cli_dataset(args.into_iter()).expect("single arg should parse");
        assert_eq!(path, Some(OsString::from("people.json")));
    }

    #[test]
    fn parse_cli_dataset_rejects_extra_args() {
        let args = vec![
            OsString::from("peoplepick"),
            OsString::from("a.json"),
            OsString::from("b.json"),
        ];
        assert!(parse_cli_dataset(args.into_iter()).is_err());
    }
}
