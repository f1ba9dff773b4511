use std::process::ExitCode;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use turf_owner_client::client::api_client::ApiClient;
use turf_owner_client::client::booking_service::BookingService;
use turf_owner_client::client::dashboard_service::DashboardService;
use turf_owner_client::client::payout_service::PayoutService;
use turf_owner_client::client::slot_service::SlotService;
use turf_owner_client::client::turf_service::TurfService;
use turf_owner_client::config::ClientConfig;
use turf_owner_client::logger;

/// Command-line companion for the turf-owner backend: inspect turfs, slots,
/// bookings and payouts from a terminal.
#[derive(Parser)]
#[command(name = "turf-owner-client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the owner's turfs.
    Turfs,
    /// Show the slot grid for one turf and date (YYYY-MM-DD).
    Slots { turf_id: i64, date: NaiveDate },
    /// List recent bookings.
    Bookings,
    /// List settlement periods.
    Payouts,
    /// Show dashboard stats and recent bookings.
    Dashboard,
}

#[tokio::main]
async fn main() -> ExitCode {
    logger::init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env();
    log::info!("Using backend at '{}'.", config.base_url);

    let api = match ApiClient::new(&config) {
        Ok(api) => Arc::new(api),
        Err(error) => {
            log::error!("Could not build API client: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Command::Turfs => {
            let service = TurfService::new(api);
            service.list_turfs().await.map(|turfs| {
                for turf in turfs {
                    let price = turf.uniform_price.map(|p| format!("{:.2}/hr", p)).unwrap_or_else(|| "dynamic".to_string());
                    println!("#{:<4} {:<24} {:<10} {}", turf.id, turf.name, turf.status, price);
                }
            })
        }
        Command::Slots { turf_id, date } => {
            let service = SlotService::new(api);
            service.fetch_slots(turf_id, date).await.map(|slots| {
                for slot in slots {
                    let state = if slot.is_booked { "booked" } else { "free" };
                    println!("#{:<6} {} - {}  {}", slot.id, slot.start_time, slot.end_time, state);
                }
            })
        }
        Command::Bookings => {
            let service = BookingService::new(api);
            service.list_bookings(&Default::default()).await.map(|bookings| {
                for booking in bookings {
                    println!(
                        "#{:<6} {:<16} {} {}-{}",
                        booking.id,
                        booking.player_name.unwrap_or_default(),
                        booking.booking_date.unwrap_or_default(),
                        booking.start_time.unwrap_or_default(),
                        booking.end_time.unwrap_or_default(),
                    );
                }
            })
        }
        Command::Payouts => {
            let service = PayoutService::new(api);
            service.list_payouts().await.map(|payouts| {
                for payout in payouts {
                    println!("#{:<4} {:<10} net {:.2}", payout.id, payout.status, payout.net_amount);
                }
            })
        }
        Command::Dashboard => {
            let service = DashboardService::new(api);
            service.load_dashboard().await.map(|view| {
                println!(
                    "turfs: {}  bookings: {}  revenue: {:.2}  pending payout: {:.2}",
                    view.stats.total_turfs, view.stats.total_bookings, view.stats.total_revenue, view.stats.pending_payout,
                );
                for booking in view.recent_bookings {
                    println!(
                        "  #{:<6} {:<16} {}",
                        booking.id,
                        booking.player_name.unwrap_or_default(),
                        booking.booking_status.unwrap_or_default(),
                    );
                }
            })
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("Request failed: {}", error);
            ExitCode::FAILURE
        }
    }
}
