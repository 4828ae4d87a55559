pub(crate) mod catalogue_card;
pub(crate) mod contact_form;
pub(crate) mod loading;
pub(crate) mod nav_item;

pub use catalogue_card::CatalogueCard;
pub use contact_form::ContactFormView;
pub use loading::Loading;
