// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inflect-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inflect and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Inflect CLI entrypoint.
//!
//! By default this runs the interactive TUI and serves the rewrite endpoint
//! over HTTP at `http://127.0.0.1:<port>/api/tone`.
//!
//! Use `--serve` to run the HTTP endpoint alone (intended for integrations).

use std::error::Error;
use std::sync::Arc;

use inflect::ops::ToneController;
use inflect::provider::{DemoProvider, MistralProvider, RewriteProvider};
use inflect::store::{StateFile, WriteDurability};

const DEFAULT_HTTP_PORT: u16 = 27461;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<state-dir>] [--durable-writes] [--http-port <port>]\n  {program} [--state <dir>] [--durable-writes] [--http-port <port>]\n  {program} --demo [--http-port <port>]\n  {program} [<state-dir>] [--durable-writes] --serve [--http-port <port>]\n\nTUI mode (default) serves the rewrite endpoint at `http://127.0.0.1:<port>/api/tone`.\n--http-port selects the port (0 = ephemeral; default {DEFAULT_HTTP_PORT}).\n\nIf state-dir/--state is omitted, the current working directory is used.\n--demo uses a built-in offline provider with a throwaway state dir and cannot\nbe combined with state-dir/--state.\n\n--durable-writes opts into slower, best-effort durable persistence (fsync/sync where supported).\n\nThe Mistral provider reads MISTRAL_API_KEY (required outside --demo), and\noptionally INFLECT_MODEL and INFLECT_ENDPOINT."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    serve: bool,
    demo: bool,
    state_dir: Option<String>,
    http_port: Option<u16>,
    durable_writes: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--serve" => {
                if options.serve {
                    return Err(());
                }
                options.serve = true;
            }
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--state" => {
                if options.state_dir.is_some() {
                    return Err(());
                }
                let dir = args.next().ok_or(())?;
                options.state_dir = Some(dir);
            }
            "--http-port" => {
                if options.http_port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let port: u16 = raw.parse().map_err(|_| ())?;
                options.http_port = Some(port);
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.state_dir.is_some() {
                    return Err(());
                }
                options.state_dir = Some(arg);
            }
        }
    }

    if options.demo && options.state_dir.is_some() {
        return Err(());
    }

    Ok(options)
}

fn state_file_for(options: &CliOptions) -> StateFile {
    let dir = if options.demo {
        let now_millis = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        std::env::temp_dir()
            .join(format!("inflect-demo-state-{}-{now_millis}", std::process::id()))
            .to_string_lossy()
            .into_owned()
    } else {
        options.state_dir.clone().unwrap_or_else(|| ".".to_owned())
    };

    if options.durable_writes {
        StateFile::new(dir).with_durability(WriteDurability::Durable)
    } else {
        StateFile::new(dir)
    }
}

fn provider_for(options: &CliOptions) -> Result<Arc<dyn RewriteProvider>, Box<dyn Error>> {
    if options.demo {
        return Ok(Arc::new(DemoProvider));
    }
    match MistralProvider::from_env() {
        Ok(provider) => Ok(Arc::new(provider)),
        Err(err) => {
            eprintln!("inflect: {}", err.user_message());
            eprintln!("inflect: set MISTRAL_API_KEY, or run with --demo for the offline provider");
            std::process::exit(2);
        }
    }
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "inflect".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let provider = provider_for(&options)?;
        let http_port = options.http_port.unwrap_or(DEFAULT_HTTP_PORT);

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        if options.serve {
            let router = inflect::server::router(provider);
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind(("127.0.0.1", http_port)).await?;
                if let Ok(addr) = listener.local_addr() {
                    eprintln!("inflect: serving http://{addr}/api/tone");
                }
                axum::serve(listener, router).await?;
                Ok::<(), Box<dyn Error>>(())
            })?;
            return Ok(());
        }

        let controller = ToneController::load_from(state_file_for(&options));

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind(("127.0.0.1", http_port)).await?;
            let router = inflect::server::router(Arc::clone(&provider));

            let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
            let server_handle = tokio::spawn(async move {
                let serve = axum::serve(listener, router).with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                });
                if let Err(err) = serve.await {
                    eprintln!("inflect: HTTP server error: {err}");
                }
            });

            let tui_join = tokio::task::spawn_blocking(move || {
                inflect::tui::run(controller, provider).map_err(|err| err.to_string())
            })
            .await;

            let _ = shutdown_tx.send(());
            let _ = server_handle.await;

            let tui_result = tui_join.map_err(|err| -> Box<dyn Error> { Box::new(err) })?;
            tui_result.map_err(|err| {
                Box::new(std::io::Error::new(std::io::ErrorKind::Other, err)) as Box<dyn Error>
            })?;
            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("inflect: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn parses_demo_flag() {
        let options = parse_options(["--demo".to_owned()].into_iter()).expect("parse options");
        assert!(options.demo);
        assert!(!options.serve);
    }

    #[test]
    fn parses_state_dir_positionally_and_with_flag() {
        let options =
            parse_options(["/tmp/state".to_owned()].into_iter()).expect("parse options");
        assert_eq!(options.state_dir.as_deref(), Some("/tmp/state"));

        let options = parse_options(["--state".to_owned(), "/tmp/state".to_owned()].into_iter())
            .expect("parse options");
        assert_eq!(options.state_dir.as_deref(), Some("/tmp/state"));
    }

    #[test]
    fn rejects_demo_combined_with_state_dir() {
        assert!(parse_options(["--demo".to_owned(), "/tmp/state".to_owned()].into_iter()).is_err());
        assert!(
            parse_options(["--state".to_owned(), "/tmp".to_owned(), "--demo".to_owned()].into_iter())
                .is_err()
        );
    }

    #[test]
    fn rejects_duplicate_flags_and_unknown_options() {
        assert!(parse_options(["--demo".to_owned(), "--demo".to_owned()].into_iter()).is_err());
        assert!(parse_options(["--frobnicate".to_owned()].into_iter()).is_err());
        assert!(parse_options(["--http-port".to_owned()].into_iter()).is_err());
        assert!(
            parse_options(["--http-port".to_owned(), "notaport".to_owned()].into_iter()).is_err()
        );
    }

    #[test]
    fn parses_serve_with_port() {
        let options = parse_options(
            ["--serve".to_owned(), "--http-port".to_owned(), "0".to_owned()].into_iter(),
        )
        .expect("parse options");
        assert!(options.serve);
        assert_eq!(options.http_port, Some(0));
    }
}
