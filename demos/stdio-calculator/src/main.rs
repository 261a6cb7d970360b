//! Line-delimited JSON-RPC calculator on stdin/stdout.
//!
//! Every input line is one request. Lines are handled concurrently, replies
//! are written one per line in completion order, and notifications get no
//! reply. Logs go to stderr.
//!
//! ```text
//! $ echo '{"jsonrpc":"2.0","method":"add","params":[1,2],"id":1}' | stdio-calculator
//! {"jsonrpc":"2.0","id":1,"result":3}
//! ```

mod audit;
mod calculator;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use clap::Parser;
use futures::FutureExt;
use jsonrpc_kernel::kernel::encode;
use jsonrpc_kernel::prelude::*;
use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use audit::AuditMiddleware;
use calculator::Calculator;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Reject requests whose "jsonrpc" member is not exactly "2.0"
    #[arg(long, env = "CALCULATOR_STRICT_VERSION")]
    strict_version: bool,

    /// Replace unexpected failure messages with "Internal error"
    #[arg(long, env = "CALCULATOR_HIDE_INTERNAL_ERRORS")]
    hide_internal_errors: bool,

    /// Start in maintenance mode (route middleware is skipped)
    #[arg(long, env = "CALCULATOR_MAINTENANCE")]
    maintenance: bool,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn build_routes() -> RouteTable {
    let mut routes = RouteTable::new();

    for op in Calculator::OPERATIONS {
        routes.add(
            Route::new(op, Action::controller("Calculator", op))
                .name(format!("calculator.{op}"))
                .middleware(["api"]),
        );
    }

    routes.add(
        Route::new(
            "ping",
            FunctionHandler::new(|_request: &Request| async { Ok::<_, BoxError>(json!("pong")) }.boxed()),
        )
        .name("ping"),
    );

    routes.add(
        Route::new(
            "echo",
            FunctionHandler::new(|request: &Request| {
                let params = request
                    .params()
                    .map(RequestParams::to_value)
                    .unwrap_or(Value::Null);
                async move { Ok::<_, BoxError>(params) }.boxed()
            }),
        )
        .middleware(["audit:echo"]),
    );

    routes
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .init();

    let completed = Arc::new(AtomicU64::new(0));
    let counter = completed.clone();
    let container = Arc::new(
        Container::new()
            .controller("Calculator", Calculator)
            .terminating(move || {
                counter.fetch_add(1, Ordering::Relaxed);
                async { Ok::<_, BoxError>(()) }.boxed()
            }),
    );
    container.set_maintenance(args.maintenance);

    let audit = Arc::new(AuditMiddleware::default());
    let middleware = MiddlewareRegistry::new()
        .alias_shared("audit", audit.clone())
        .group("api", ["audit:calculator"]);

    let config = KernelConfig::new()
        .strict_version(args.strict_version)
        .expose_internal_errors(!args.hide_internal_errors);

    let kernel = Arc::new(
        Kernel::new(build_routes(), container.clone())
            .with_middleware(middleware)
            .with_config(config),
    );
    info!(
        routes = kernel.routes().len(),
        maintenance = container.is_down_for_maintenance(),
        "stdio-calculator ready"
    );

    let (tx, mut rx) = mpsc::unbounded_channel::<Vec<u8>>();
    let writer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(mut reply) = rx.recv().await {
            reply.push(b'\n');
            stdout.write_all(&reply).await?;
            stdout.flush().await?;
        }
        Ok::<_, std::io::Error>(())
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut calls = JoinSet::new();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let kernel = kernel.clone();
        let tx = tx.clone();
        calls.spawn(async move {
            let exchange = kernel.process(line.as_bytes()).await;
            if exchange.expects_reply() {
                if tx.send(encode(&exchange.response)).is_err() {
                    warn!("stdout writer has stopped; dropping reply");
                }
            } else {
                debug!("notification handled, no reply written");
            }

            if let Err(err) = kernel.terminate_exchange(&exchange).await {
                warn!("terminate hook failed: {}", err);
            }
        });
    }

    while let Some(joined) = calls.join_next().await {
        if let Err(err) = joined {
            warn!("call task failed: {}", err);
        }
    }
    drop(tx);
    writer.await??;

    info!(
        completed = completed.load(Ordering::Relaxed),
        audited = audit.calls(),
        "stdin closed, shutting down"
    );
    Ok(())
}
