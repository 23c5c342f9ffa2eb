use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sd_app::usecases::OrderQuery;
use sd_core::onboarding::UserSetupData;

#[derive(Debug, Parser)]
#[command(name = "shipdesk")]
#[command(about = "ShipDesk onboarding and order lookup", long_about = None)]
pub struct Cli {
    /// Config file (defaults to <data dir>/config.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the simulated order lookup latency
    #[arg(long, global = true)]
    pub latency_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Onboarding progress of the local profile
    Onboarding {
        #[command(subcommand)]
        cmd: OnboardingCmd,
    },

    /// Order lookups
    Order {
        #[command(subcommand)]
        cmd: OrderCmd,
    },
}

#[derive(Debug, Subcommand)]
pub enum OnboardingCmd {
    /// Print the current state
    Show,
    /// Submit the business setup form and start the tour
    Setup(SetupArgs),
    /// Next tour step
    Next,
    /// Previous tour step
    Prev,
    /// Finish the tour
    Finish,
    /// Skip the rest of the onboarding
    Skip,
    /// Erase onboarding progress
    Reset,
}

#[derive(Debug, Args)]
pub struct SetupArgs {
    #[arg(long)]
    pub business_name: String,

    #[arg(long)]
    pub contact_phone: String,

    #[arg(long)]
    pub pickup_address: String,

    #[arg(long)]
    pub preferred_courier: String,

    #[arg(long, default_value_t = false)]
    pub same_day_delivery: bool,
}

impl From<SetupArgs> for UserSetupData {
    fn from(args: SetupArgs) -> Self {
        Self {
            business_name: args.business_name,
            contact_phone: args.contact_phone,
            pickup_address: args.pickup_address,
            preferred_courier: args.preferred_courier,
            same_day_delivery: args.same_day_delivery,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum OrderCmd {
    /// Look up by order number
    Number { order_number: String },
    /// Look up by carrier AWB
    Awb { awb: String },
    /// Look up by customer reference (matched on its last three characters)
    Reference { reference: String },
}

impl From<OrderCmd> for OrderQuery {
    fn from(cmd: OrderCmd) -> Self {
        match cmd {
            OrderCmd::Number { order_number } => OrderQuery::Number(order_number),
            OrderCmd::Awb { awb } => OrderQuery::Awb(awb),
            OrderCmd::Reference { reference } => OrderQuery::Reference(reference),
        }
    }
}
