use crate::modules::restaurants::adapters::outbound::restaurant_store::{
    RepositoryError, RestaurantRepository, StaffRepository,
};
use crate::modules::restaurants::core::errors::{ApplicationError, RestaurantError};
use crate::modules::restaurants::core::restaurant::AccessScope;
use crate::modules::restaurants::core::staff::StaffMember;
use crate::modules::restaurants::use_cases::create_staff::command::CreateStaff;
use crate::modules::restaurants::use_cases::visible_restaurant::load_visible_restaurant;
use crate::shared::infrastructure::identity_provider::{
    IdentityError, IdentityProvider, NewStaffUser,
};
use std::sync::Arc;
use uuid::Uuid;

pub struct CreateStaffHandler<TRestaurants, TStaff, TIdentity>
where
    TRestaurants: RestaurantRepository + 'static,
    TStaff: StaffRepository + 'static,
    TIdentity: IdentityProvider + 'static,
{
    restaurants: Arc<TRestaurants>,
    staff: Arc<TStaff>,
    identity_provider: Arc<TIdentity>,
}

impl<TRestaurants, TStaff, TIdentity> CreateStaffHandler<TRestaurants, TStaff, TIdentity>
where
    TRestaurants: RestaurantRepository + 'static,
    TStaff: StaffRepository + 'static,
    TIdentity: IdentityProvider + 'static,
{
    pub fn new(
        restaurants: Arc<TRestaurants>,
        staff: Arc<TStaff>,
        identity_provider: Arc<TIdentity>,
    ) -> Self {
        Self {
            restaurants,
            staff,
            identity_provider,
        }
    }

    /// Provisions the account at the identity provider first, then the staff row.
    /// A row that cannot be stored takes the account down with it.
    pub async fn handle(
        &self,
        scope: &AccessScope,
        command: CreateStaff,
    ) -> Result<StaffMember, ApplicationError> {
        load_visible_restaurant(&*self.restaurants, command.restaurant_id, scope).await?;

        if self.staff.find_by_email(&command.email).await?.is_some() {
            return Err(RestaurantError::StaffAlreadyExists(command.email).into());
        }

        let identity_id = self
            .identity_provider
            .create_staff_user(NewStaffUser {
                email: command.email.clone(),
                password: command.password,
                first_names: command.name.clone(),
                last_names: command.last_name.clone(),
            })
            .await
            .map_err(|e| match e {
                IdentityError::UserAlreadyExists(email) => {
                    ApplicationError::Domain(RestaurantError::StaffAlreadyExists(email))
                }
                IdentityError::Refused(reason) => {
                    ApplicationError::Domain(RestaurantError::StaffAccountRefused(reason))
                }
                other => ApplicationError::Identity(other),
            })?;

        let member = StaffMember {
            id: Uuid::now_v7(),
            restaurant_id: command.restaurant_id,
            identity_id,
            email: command.email,
            name: command.name,
            last_name: command.last_name,
            role: command.role,
            is_active: command.is_active,
            created_at: command.requested_at,
            updated_at: command.requested_at,
        };

        if let Err(e) = self.staff.insert(member.clone()).await {
            if let Err(rollback) = self.identity_provider.delete_user(&member.email).await {
                tracing::error!(email = %member.email, error = %rollback, "staff account rollback failed");
            }
            return Err(match e {
                RepositoryError::Duplicate(_) => {
                    RestaurantError::StaffAlreadyExists(member.email).into()
                }
                other => other.into(),
            });
        }

        tracing::info!(staff_id = %member.id, restaurant_id = %member.restaurant_id, "staff member created");
        Ok(member)
    }
}
