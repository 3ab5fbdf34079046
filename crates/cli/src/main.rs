use api_shared::{Role, RoleFilter, TimeRange};
use caredesk_core::{navigation, Dashboard, DashboardError};
use caredesk_types::SearchTerm;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "caredesk")]
#[command(about = "CareDesk healthcare dashboard CLI (runs against fresh demo data)")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the healthcare assistant a question
    Ask {
        /// Message text
        text: String,
    },
    /// List users
    Users {
        /// patient, doctor, admin or all
        #[arg(long, default_value = "all")]
        role: RoleFilter,
        /// Match on name or email
        #[arg(long)]
        search: Option<String>,
    },
    /// Toggle a user between active and inactive
    Toggle {
        /// User id
        id: String,
    },
    /// List doctors and their available slots
    Doctors,
    /// List medical records
    Records,
    /// List the doctor's patients
    Patients {
        /// Match on name or condition
        #[arg(long)]
        search: Option<String>,
    },
    /// Print the analytics snapshot as JSON
    Analytics {
        /// 1m, 3m, 6m or 1y
        #[arg(long, default_value = "6m")]
        time_range: TimeRange,
    },
    /// Show a role's dashboard links
    Nav {
        /// patient, doctor or admin
        role: Role,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let dashboard = Dashboard::with_demo_data();

    match cli.command {
        Some(Commands::Ask { text }) => match dashboard.chat.send(&text) {
            Ok(exchange) => println!("{}", exchange.reply.text),
            Err(DashboardError::EmptyText(_)) => eprintln!("Nothing to send."),
            Err(e) => eprintln!("Error sending message: {}", e),
        },
        Some(Commands::Users { role, search }) => {
            let search = SearchTerm::from_optional(search.as_deref());
            let users = dashboard.users.filter(&search, role)?;
            if users.is_empty() {
                println!("No users found.");
            }
            for user in users {
                println!(
                    "ID: {}, Name: {}, Email: {}, Role: {}, Status: {:?}, Joined: {}",
                    user.id, user.name, user.email, user.role, user.status, user.join_date
                );
            }
        }
        Some(Commands::Toggle { id }) => match dashboard.users.toggle_status(&id) {
            Ok(user) => println!("User {} is now {:?}", user.id, user.status),
            Err(e) => eprintln!("Error toggling user: {}", e),
        },
        Some(Commands::Doctors) => {
            for doctor in dashboard.appointments.doctors() {
                println!(
                    "ID: {}, {} ({}), Slots: {}",
                    doctor.id,
                    doctor.name,
                    doctor.specialization,
                    doctor.available_slots.join(", ")
                );
            }
        }
        Some(Commands::Records) => {
            for record in dashboard.records.list() {
                println!(
                    "ID: {}, {} - {} ({})",
                    record.id, record.date, record.diagnosis, record.doctor_name
                );
                for line in record.prescription.lines() {
                    println!("    {}", line);
                }
            }
        }
        Some(Commands::Patients { search }) => {
            let term = SearchTerm::from_optional(search.as_deref());
            for patient in dashboard.patients.search(&term) {
                println!(
                    "ID: {}, Name: {}, {}/{}, Condition: {}, Last visit: {}",
                    patient.id,
                    patient.name,
                    patient.age,
                    patient.gender,
                    patient.condition,
                    patient.last_visit
                );
            }
        }
        Some(Commands::Analytics { time_range }) => {
            let snapshot = dashboard.analytics.snapshot(time_range);
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        Some(Commands::Nav { role }) => {
            let nav = navigation(role);
            println!("{}", nav.title);
            for link in nav.links {
                println!("  {} -> {}", link.label, link.href);
            }
        }
        None => {
            println!("Use 'caredesk --help' for commands");
        }
    }

    Ok(())
}
