use futures::future::try_join_all;
use model::{
    child::{Behavior, Child, ChildView, NewChild},
    delivery::DeliveryStop,
    location::Location,
    WithId,
};
use utility::{geo::GeoPoint, let_also::LetAlso};

use crate::{
    aggregate, classify,
    database::{ChildRepo, Database, DatabaseError, LocationRepo, Repo},
    route, RequestError, RequestResult,
};

/// Entry point for everything the service does with the store.
#[derive(Debug, Clone)]
pub struct Client<D>
where
    D: Database,
{
    pub database: D,
}

impl<D> Client<D>
where
    D: Database,
{
    pub fn new(database: D) -> Self {
        Self { database }
    }

    pub async fn get_locations(&self) -> RequestResult<Vec<WithId<Location>>> {
        Ok(Repo::<Location>::get_all(&mut self.database.auto()).await?)
    }

    pub async fn get_children(&self) -> RequestResult<Vec<WithId<Child>>> {
        Ok(Repo::<Child>::get_all(&mut self.database.auto()).await?)
    }

    /// All children with the given behavior, each with its location resolved.
    pub async fn get_children_by_behavior(
        &self,
        behavior: Behavior,
    ) -> RequestResult<Vec<WithId<ChildView>>> {
        let children = classify::select(self.get_children().await?, behavior);
        try_join_all(children.into_iter().map(|child| self.resolve_child(child))).await
    }

    /// Replaces the location reference of a child with the location itself.
    ///
    /// Children are only stored after their location has been found, so a
    /// reference that does not resolve is reported as an inconsistency
    /// rather than as a missing item.
    pub async fn resolve_child(
        &self,
        child: WithId<Child>,
    ) -> RequestResult<WithId<ChildView>> {
        let location_id = child.content.location.clone();
        match Repo::<Location>::get(&mut self.database.auto(), location_id.clone()).await {
            Ok(location) => Ok(child.map(|child| ChildView::new(child, location))),
            Err(DatabaseError::NotFound) => {
                log::error!(
                    "child {} references missing location {}",
                    child.id,
                    location_id
                );
                Err(RequestError::Inconsistent(format!(
                    "Location {} of child {} does not exist.",
                    location_id, child.id
                )))
            }
            Err(why) => Err(why.into()),
        }
    }

    /// Every location with its live number of good children, most good
    /// children first.
    pub async fn get_deliveries(&self) -> RequestResult<Vec<DeliveryStop>> {
        let good_children = classify::select_good(self.get_children().await?);
        let locations = self.get_locations().await?;
        aggregate::tally(&good_children, locations)
            .let_owned(route::rank)
            .let_owned(Ok)
    }

    /// Length in km of the route through all delivery stops in ranked order.
    pub async fn get_route_distance(&self) -> RequestResult<f64> {
        self.get_deliveries()
            .await?
            .let_owned(|stops| Ok(route::total_distance(&stops)))
    }

    pub async fn push_location(
        &self,
        location: Location,
    ) -> RequestResult<WithId<Location>> {
        if location.name.trim().is_empty() {
            return Err(RequestError::Invalid(
                "A location needs a name.".to_owned(),
            ));
        }
        if !location.coordinates.is_on_globe() {
            return Err(RequestError::Invalid(format!(
                "Coordinates ({}, {}) are out of range.",
                location.coordinates.latitude, location.coordinates.longitude
            )));
        }

        Ok(Repo::<Location>::insert(&mut self.database.auto(), location).await?)
    }

    /// Registers a child at the location with the given name.
    pub async fn push_child(&self, child: NewChild) -> RequestResult<WithId<NewChild>> {
        if child.name.trim().is_empty() || child.location_name.trim().is_empty() {
            return Err(RequestError::Invalid(
                "A child needs a name and a location.".to_owned(),
            ));
        }

        let mut db = self.database.auto();
        if db.child_by_name(child.name.as_str()).await?.is_some() {
            return Err(RequestError::Conflict(format!(
                "A child named '{}' already exists.",
                child.name
            )));
        }

        let location = db
            .location_by_name(child.location_name.as_str())
            .await?
            .ok_or_else(|| {
                RequestError::NotFound(format!(
                    "There is no location named '{}'.",
                    child.location_name
                ))
            })?;

        let stored = Child {
            name: child.name.clone(),
            behavior: child.behavior,
            location: location.id,
        };
        match Repo::<Child>::insert(&mut db, stored).await {
            Ok(inserted) => Ok(inserted.map(|_| child)),
            // lost a race against a request with the same name
            Err(DatabaseError::Conflict) => Err(RequestError::Conflict(format!(
                "A child named '{}' already exists.",
                child.name
            ))),
            Err(why) => Err(why.into()),
        }
    }
}
