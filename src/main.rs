#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use anyhow::Result;
use lure::run;

fn main() -> Result<()> {
  run()
}
