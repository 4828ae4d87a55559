pub mod catalogue;
pub mod contact;
pub mod load;
pub mod session;

pub use catalogue::{
    CatalogueItem, EntityKind, FavoriteEntry, LikePayload, Page, Property, flatten_properties,
};
pub use contact::{Agenda, Contact, ContactForm, ContactId, ContactPatch, EditIntent};
pub use load::Load;
pub use session::{AuthPayload, Credentials, SessionUser};
