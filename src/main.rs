//! hostelog main entrypoint.

use hostelog::run;
use hostelog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
