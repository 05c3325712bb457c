//! Frozen sample records and non-mutating edits over them

mod operations;
mod users;

pub use operations::{
    add_new_user, change_users_address, convert_users_geo_to_number, remove_address_coordinates,
    remove_company_info,
};
pub use users::sample_users;
