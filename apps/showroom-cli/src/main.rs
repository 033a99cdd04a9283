//! # Showroom Entry Point
//!
//! The actual setup is in lib.rs.

fn main() {
    std::process::exit(showroom_cli::run());
}
