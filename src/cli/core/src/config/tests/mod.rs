/* src/cli/core/src/config/tests/mod.rs */

use super::loader::*;
use super::types::*;

mod discovery;
