
pub mod models;
pub mod random;

use crate::models::Problem;
use crate::models::problem::{Client, ClientId, Cost, Facility, FacilityId};
