//! rTimeDiary main entrypoint.

use rtimediary::run;
use rtimediary::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
