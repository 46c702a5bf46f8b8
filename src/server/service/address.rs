use crate::server::{
    data::address::AddressStore,
    error::AppError,
    model::{address::Address, event::CreateEventParams, event::Event},
};

pub struct AddressService<'a> {
    addresses: &'a dyn AddressStore,
}

impl<'a> AddressService<'a> {
    pub fn new(addresses: &'a dyn AddressStore) -> Self {
        Self { addresses }
    }

    /// Creates the address of `event` from the city and state of the creation params.
    ///
    /// Empty values are stored as given.
    pub async fn create_address(
        &self,
        params: &CreateEventParams,
        event: &Event,
    ) -> Result<Address, AppError> {
        let address = self
            .addresses
            .create(event.id, &params.city, &params.state)
            .await?;

        Ok(Address::from_entity(address))
    }
}
