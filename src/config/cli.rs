use crate::domain::model::FieldUpdate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "smile-desk")]
#[command(about = "Compose dental appointment requests and browse testimonials")]
pub struct CliConfig {
    /// Path to a TOML practice configuration (built-in tables when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Compose an appointment request and hand it off
    Book(BookArgs),
    /// List the bookable services
    Services,
    /// List the preferred time slots
    Slots,
    /// Show a testimonial from the carousel
    Testimonials(TestimonialArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct BookArgs {
    /// JSON form payload to start from; flags below override its fields
    #[arg(long)]
    pub draft: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Service code, e.g. `implants`
    #[arg(long)]
    pub service: Option<String>,

    /// Preferred date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Preferred time slot, e.g. "9:00 AM"
    #[arg(long)]
    pub time: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,

    #[arg(long)]
    pub emergency: bool,

    /// Print the message and URL without opening anything
    #[arg(long)]
    pub dry_run: bool,
}

impl BookArgs {
    /// Field edits for every flag that was given, in form order.
    pub fn field_updates(&self) -> Vec<FieldUpdate> {
        let mut updates = Vec::new();
        if let Some(v) = &self.name {
            updates.push(FieldUpdate::Name(v.clone()));
        }
        if let Some(v) = &self.phone {
            updates.push(FieldUpdate::Phone(v.clone()));
        }
        if let Some(v) = &self.email {
            updates.push(FieldUpdate::Email(v.clone()));
        }
        if let Some(v) = &self.service {
            updates.push(FieldUpdate::ServiceCode(v.clone()));
        }
        if let Some(v) = &self.date {
            updates.push(FieldUpdate::PreferredDate(v.clone()));
        }
        if let Some(v) = &self.time {
            updates.push(FieldUpdate::PreferredTime(v.clone()));
        }
        if let Some(v) = &self.notes {
            updates.push(FieldUpdate::Notes(v.clone()));
        }
        if self.emergency {
            updates.push(FieldUpdate::Emergency(true));
        }
        updates
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct TestimonialArgs {
    /// Zero-based position to jump to first
    #[arg(long)]
    pub goto: Option<usize>,

    /// Steps forward after the jump
    #[arg(long, default_value = "0")]
    pub next: usize,

    /// Steps backward after moving forward
    #[arg(long, default_value = "0")]
    pub previous: usize,
}
