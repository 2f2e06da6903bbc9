mod pad_id;
mod registry;
mod router;

pub use {
    pad_id::{PAD_COUNT, PadId},
    registry::PadRegistry,
    router::{RawInput, SessionClock, TriggerEvent, TriggerRouter},
};
