use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info};
use parking_lot::deadlock;
use tokio::runtime::Builder;
use tokio::sync::watch;
use view_counter::common::common::setup_logging;
use view_counter::config::structs::configuration::Configuration;
use view_counter::database::structs::database_connector::DatabaseConnector;
use view_counter::persistence::persistence::persistence_service;
use view_counter::structs::Cli;
use view_counter::tracker::structs::view_tracker::ViewTracker;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tracker = Arc::new(ViewTracker::new(config.clone()));

            if let Err(error) = tracker.check_for_records().await {
                error!("[RECOVERY] Unable to load previous state: {error}");
                exit(1);
            }

            if args.report {
                for (page, count) in tracker.pages.snapshot() {
                    println!("{page}\t{count}");
                }
                println!("unique visitors\t{}", tracker.get_unique_visitor_count());
                return Ok(());
            }

            let connector = match DatabaseConnector::new(config.clone()).await {
                Ok(connector) => connector,
                Err(error) => {
                    error!("[BOOT] Unable to open store: {error}");
                    exit(1);
                }
            };

            let (shutdown_tx, shutdown_rx) = watch::channel(false);

            let mut deadlocks_handler = shutdown_rx.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.changed() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let mut stats_handler = shutdown_rx.clone();
            let tracker_spawn_stats = tracker.clone();
            let console_interval = tracker_spawn_stats.config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let stats = tracker_spawn_stats.get_stats();
                            info!(
                                "[STATS] Pages: {} - Visitors: {} - Views: {} | Flushes: {} - Failed: {} - Next: {}",
                                stats.pages, stats.visitors, stats.views,
                                stats.flushes, stats.flush_failures, stats.timestamp_run_save
                            );
                        }
                        _ = stats_handler.changed() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            let persistence_handle = persistence_service(tracker.clone(), connector, shutdown_rx).await;

            if let Err(error) = tokio::signal::ctrl_c().await {
                error!("Unable to listen for shutdown signal: {error}");
            }
            info!("Shutdown request received, shutting down...");

            let _ = shutdown_tx.send(true);
            if let Err(error) = persistence_handle.await {
                error!("[PERSIST] Persistence thread failed: {error}");
            }

            info!("Server shutting down completed");
            Ok(())
        })
}
