pub mod catalogue;
pub mod report;
pub mod requests;
pub mod shared;

pub mod prelude {
    pub use crate::catalogue::{Bus, BusId, BusInfo, Stop, StopId, TransportCatalogue};
    pub use crate::shared::geo::{Coordinate, Distance};
}
