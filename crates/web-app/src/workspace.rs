use chrono::{DateTime, Utc};
use log::{debug, error};
use setwise_domain::{
    Catalog, CatalogService, CreateError, Cycle, Day, Engine, Name, NameError, Plan, PlanError,
    PlanService, ReadError, Routine, RoutineService, UpdateError, default_exercises, default_plan,
};

use crate::AppMessage;

/// The state being edited: the catalog, the saved routines and the current plan.
///
/// Every operation persists its changes through the given service and reports
/// the outcome as an [`AppMessage`].
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    pub catalog: Catalog,
    pub routines: Vec<Routine>,
    pub plan: Plan,
    pub current_cycle: usize,
    pub selected_routine: Option<Name>,
    pub message: Option<AppMessage>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self {
            catalog: Catalog::new(default_exercises()),
            routines: vec![],
            plan: default_plan(),
            current_cycle: 0,
            selected_routine: None,
            message: None,
        }
    }
}

impl Workspace {
    /// Loads the stored state. The selected routine, if it still exists, replaces the
    /// stored plan. Falls back to the defaults if the storage cannot be read.
    pub async fn load<S>(service: &S) -> Self
    where
        S: CatalogService + PlanService + RoutineService,
    {
        match Self::read(service).await {
            Ok(workspace) => workspace,
            Err(err) => {
                error!("failed to load data: {err}");
                Self {
                    message: Some(AppMessage::error("Failed to load data from database")),
                    ..Self::default()
                }
            }
        }
    }

    async fn read<S>(service: &S) -> Result<Self, ReadError>
    where
        S: CatalogService + PlanService + RoutineService,
    {
        let catalog = service.get_catalog().await?;
        let routines = service.get_routines().await?;
        let mut plan = service.get_plan().await?;
        let mut selected_routine = service.get_selected_routine().await?;
        let mut message = None;

        if let Some(name) = &selected_routine {
            if let Some(routine) = routines.iter().find(|r| r.name == *name) {
                plan = routine.plan.clone();
            } else {
                debug!("selected routine {name} does not exist anymore");
                selected_routine = None;
                if service.select_routine(None).await.is_err() {
                    message = Some(AppMessage::error(SELECTION_ERROR));
                }
            }
        }

        Ok(Self {
            catalog,
            routines,
            plan,
            current_cycle: 0,
            selected_routine,
            message,
        })
    }

    async fn store_selection<S: RoutineService>(&mut self, service: &S) {
        if service
            .select_routine(self.selected_routine.as_ref())
            .await
            .is_err()
        {
            self.message = Some(AppMessage::error(SELECTION_ERROR));
        }
    }

    /// The analysis of the current micro cycle.
    #[must_use]
    pub fn engine(&self) -> Engine<'_> {
        Engine::new(&self.catalog, self.current_days())
    }

    #[must_use]
    pub fn current_days(&self) -> &[Day] {
        self.plan
            .cycle(self.current_cycle)
            .map(Cycle::days)
            .unwrap_or_default()
    }

    pub fn select_cycle(&mut self, index: usize) -> Result<(), PlanError> {
        self.plan.cycle(index)?;
        self.current_cycle = index;
        Ok(())
    }

    /// Removes the message once it has been shown long enough.
    pub fn expire_message(&mut self, now: DateTime<Utc>) {
        if self.message.as_ref().is_some_and(|m| m.is_expired(now)) {
            self.message = None;
        }
    }

    pub async fn save_plan<S: PlanService>(&mut self, service: &S) {
        if service.save_plan(&self.plan).await.is_err() {
            self.message = Some(AppMessage::error("Failed to save cycles"));
        }
    }

    /// Applies an edit to the plan and saves it, or reports why the edit was rejected.
    pub async fn edit_plan<S: PlanService, T>(
        &mut self,
        service: &S,
        edit: impl FnOnce(&mut Plan) -> Result<T, PlanError>,
    ) -> Option<T> {
        match edit(&mut self.plan) {
            Ok(value) => {
                self.save_plan(service).await;
                Some(value)
            }
            Err(err) => {
                self.message = Some(AppMessage::error(err.to_string()));
                None
            }
        }
    }

    pub async fn copy_cycle<S: PlanService>(&mut self, service: &S, index: usize) {
        let Ok(name) = self.plan.cycle(index).map(|cycle| cycle.name.to_string()) else {
            return;
        };
        if self
            .edit_plan(service, |plan| plan.copy_cycle(index))
            .await
            .is_some()
        {
            self.message = Some(AppMessage::success(format!(
                "Micro Cycle \"{name}\" copied successfully!"
            )));
        }
    }

    pub async fn delete_cycle<S: PlanService>(&mut self, service: &S, index: usize) {
        if self
            .edit_plan(service, |plan| plan.delete_cycle(index))
            .await
            .is_some()
        {
            self.current_cycle = self
                .current_cycle
                .min(self.plan.cycles().len().saturating_sub(1));
        }
    }

    pub async fn copy_day<S: PlanService>(&mut self, service: &S, day: usize) {
        let cycle = self.current_cycle;
        let Ok(name) = self
            .plan
            .cycle(cycle)
            .and_then(|c| c.day(day))
            .map(|d| d.name.to_string())
        else {
            return;
        };
        if self
            .edit_plan(service, |plan| plan.cycle_mut(cycle)?.copy_day(day))
            .await
            .is_some()
        {
            self.message = Some(AppMessage::success(format!(
                "Day \"{name}\" copied successfully!"
            )));
        }
    }

    pub async fn delete_day<S: PlanService>(&mut self, service: &S, day: usize) {
        let cycle = self.current_cycle;
        self.edit_plan(service, |plan| plan.cycle_mut(cycle)?.delete_day(day))
            .await;
    }

    pub async fn rename_day<S: PlanService>(&mut self, service: &S, day: usize, name: &str) {
        if matches!(Name::new(name), Err(NameError::Empty)) {
            self.message = Some(AppMessage::error("Day name cannot be empty."));
            return;
        }
        let cycle = self.current_cycle;
        self.edit_plan(service, |plan| plan.cycle_mut(cycle)?.rename_day(day, name))
            .await;
    }

    pub async fn copy_exercise<S: PlanService>(&mut self, service: &S, day: usize, exercise: usize) {
        let cycle = self.current_cycle;
        if self
            .edit_plan(service, |plan| {
                plan.cycle_mut(cycle)?.day_mut(day)?.copy_exercise(exercise)
            })
            .await
            .is_some()
        {
            self.message = Some(AppMessage::success("Exercise copied successfully!"));
        }
    }

    /// Replaces the plan by an imported one.
    pub async fn import_plan<S: PlanService>(&mut self, service: &S, plan: Plan) {
        self.plan = plan;
        self.current_cycle = 0;
        self.message = Some(AppMessage::success("Workout plan loaded successfully!"));
        self.save_plan(service).await;
    }

    /// Starts over with an empty plan that belongs to no routine.
    pub async fn new_routine<S: PlanService + RoutineService>(&mut self, service: &S) {
        self.selected_routine = None;
        self.plan = Plan::default();
        self.current_cycle = 0;
        self.message = Some(AppMessage::success(
            "New routine created! Start adding exercises to build your workout.",
        ));
        self.store_selection(service).await;
        self.save_plan(service).await;
    }

    /// Loads the plan of a saved routine, or only clears the selection if `name` is `None`.
    pub async fn select_routine<S: PlanService + RoutineService>(
        &mut self,
        service: &S,
        name: Option<Name>,
    ) {
        if let Some(routine) = name
            .as_ref()
            .and_then(|n| self.routines.iter().find(|r| r.name == *n))
        {
            self.plan = routine.plan.clone();
            self.current_cycle = 0;
            self.save_plan(service).await;
        }
        self.selected_routine = name;
        self.store_selection(service).await;
    }

    /// Saves the plan as a new routine and selects it.
    pub async fn save_as_routine<S: RoutineService>(&mut self, service: &S, name: &str) {
        let name = match Name::new(name) {
            Ok(name) => name,
            Err(err) => {
                self.message = Some(AppMessage::error(routine_name_message(&err)));
                return;
            }
        };
        match service.create_routine(name, self.plan.clone()).await {
            Ok(routine) => {
                self.message = Some(AppMessage::success(format!(
                    "Routine \"{}\" saved and selected!",
                    routine.name
                )));
                self.selected_routine = Some(routine.name.clone());
                self.routines.push(routine);
                self.store_selection(service).await;
            }
            Err(CreateError::Conflict) => {
                self.message = Some(AppMessage::error(
                    "A routine with this name already exists.",
                ));
            }
            Err(_) => {
                self.message = Some(AppMessage::error("Failed to save routine"));
            }
        }
    }

    /// Overwrites the selected routine with the current plan.
    pub async fn update_selected_routine<S: RoutineService>(&mut self, service: &S) {
        let Some(name) = self.selected_routine.clone() else {
            return;
        };
        let routine = Routine {
            name,
            plan: self.plan.clone(),
        };
        match service.replace_routine(routine).await {
            Ok(routine) => {
                self.message = Some(AppMessage::success(format!(
                    "Routine \"{}\" updated successfully!",
                    routine.name
                )));
                if let Some(saved) = self.routines.iter_mut().find(|r| r.name == routine.name) {
                    *saved = routine;
                }
            }
            Err(_) => {
                self.message = Some(AppMessage::error("Failed to update routine"));
            }
        }
    }

    pub async fn rename_selected_routine<S: RoutineService>(&mut self, service: &S, name: &str) {
        let Some(old_name) = self.selected_routine.clone() else {
            return;
        };
        let new_name = match Name::new(name) {
            Ok(name) => name,
            Err(err) => {
                self.message = Some(AppMessage::error(routine_name_message(&err)));
                return;
            }
        };
        match service.rename_routine(&old_name, new_name).await {
            Ok(routine) => {
                self.message = Some(AppMessage::success(format!(
                    "Routine renamed from \"{old_name}\" to \"{}\"!",
                    routine.name
                )));
                self.selected_routine = Some(routine.name.clone());
                if let Some(saved) = self.routines.iter_mut().find(|r| r.name == old_name) {
                    *saved = routine;
                }
            }
            Err(UpdateError::Conflict) => {
                self.message = Some(AppMessage::error(
                    "A routine with this name already exists.",
                ));
            }
            Err(_) => {
                self.message = Some(AppMessage::error("Failed to rename routine"));
            }
        }
    }

    pub async fn delete_selected_routine<S: RoutineService>(&mut self, service: &S) {
        let Some(name) = self.selected_routine.clone() else {
            return;
        };
        match service.delete_routine(&name).await {
            Ok(name) => {
                self.routines.retain(|r| r.name != name);
                self.selected_routine = None;
                self.message = Some(AppMessage::success("Routine deleted successfully!"));
            }
            Err(_) => {
                self.message = Some(AppMessage::error("Failed to delete routine"));
            }
        }
    }

    /// Replaces all routines, exercises and the plan by the defaults.
    pub async fn reset<S>(&mut self, service: &S)
    where
        S: CatalogService + PlanService + RoutineService,
    {
        match reset_data(service).await {
            Ok((catalog, plan)) => {
                *self = Self {
                    catalog,
                    plan,
                    message: Some(AppMessage::success("Reset to default successful!")),
                    ..Self::default()
                };
            }
            Err(err) => {
                error!("failed to reset data: {err}");
                self.message = Some(AppMessage::error("Failed to reset data"));
            }
        }
    }
}

async fn reset_data<S>(service: &S) -> Result<(Catalog, Plan), Box<dyn std::error::Error>>
where
    S: CatalogService + PlanService + RoutineService,
{
    let catalog = service.reset_catalog().await?;
    for routine in service.get_routines().await? {
        service.delete_routine(&routine.name).await?;
    }
    service.select_routine(None).await?;
    let plan = default_plan();
    service.save_plan(&plan).await?;
    Ok((catalog, plan))
}

const SELECTION_ERROR: &str = "Failed to save routine selection";

fn routine_name_message(err: &NameError) -> String {
    match err {
        NameError::Empty => "Please enter a routine name.".to_string(),
        NameError::TooLong(_) => err.to_string(),
    }
}
