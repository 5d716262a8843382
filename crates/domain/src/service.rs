use log::{debug, error};

use crate::{
    Catalog, CatalogService, CreateError, DeleteError, ExerciseDefinition, ExerciseRepository,
    Name, Plan, PlanRepository, PlanService, ReadError, Routine, RoutineRepository,
    RoutineService, UpdateError, catalog, routine_name_available,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ExerciseRepository> Service<R> {
    async fn read_catalog(&self) -> Result<Catalog, ReadError> {
        Ok(Catalog::new(
            self.repository
                .read_exercises()
                .await?
                .filter(|exercises| !exercises.is_empty())
                .unwrap_or_else(catalog::default_exercises),
        ))
    }

    async fn add_exercise(&self, exercise: ExerciseDefinition) -> Result<Catalog, CreateError> {
        let mut catalog = self.read_catalog().await?;
        catalog.add(exercise)?;
        self.repository.write_exercises(catalog.exercises()).await?;
        Ok(catalog)
    }

    async fn modify_exercise(
        &self,
        name: &Name,
        exercise: ExerciseDefinition,
    ) -> Result<Catalog, UpdateError> {
        let mut catalog = self.read_catalog().await?;
        catalog.replace(name, exercise)?;
        self.repository.write_exercises(catalog.exercises()).await?;
        Ok(catalog)
    }

    async fn remove_exercise(&self, name: &Name) -> Result<Catalog, DeleteError> {
        let mut catalog = self.read_catalog().await?;
        catalog.delete(name)?;
        self.repository.write_exercises(catalog.exercises()).await?;
        Ok(catalog)
    }

    async fn restore_catalog(&self) -> Result<Catalog, UpdateError> {
        let catalog = Catalog::new(catalog::default_exercises());
        self.repository.write_exercises(catalog.exercises()).await?;
        Ok(catalog)
    }
}

impl<R: ExerciseRepository> CatalogService for Service<R> {
    async fn get_catalog(&self) -> Result<Catalog, ReadError> {
        log_on_error!(self.read_catalog(), ReadError, "get", "catalog")
    }

    async fn create_exercise(&self, exercise: ExerciseDefinition) -> Result<Catalog, CreateError> {
        log_on_error!(
            self.add_exercise(exercise),
            CreateError,
            "create",
            "exercise"
        )
    }

    async fn replace_exercise(
        &self,
        name: &Name,
        exercise: ExerciseDefinition,
    ) -> Result<Catalog, UpdateError> {
        log_on_error!(
            self.modify_exercise(name, exercise),
            UpdateError,
            "replace",
            "exercise"
        )
    }

    async fn delete_exercise(&self, name: &Name) -> Result<Catalog, DeleteError> {
        log_on_error!(
            self.remove_exercise(name),
            DeleteError,
            "delete",
            "exercise"
        )
    }

    async fn reset_catalog(&self) -> Result<Catalog, UpdateError> {
        log_on_error!(self.restore_catalog(), UpdateError, "reset", "catalog")
    }
}

impl<R: PlanRepository> Service<R> {
    async fn read_plan(&self) -> Result<Plan, ReadError> {
        Ok(self
            .repository
            .read_plan()
            .await?
            .unwrap_or_else(catalog::default_plan))
    }
}

impl<R: PlanRepository> PlanService for Service<R> {
    async fn get_plan(&self) -> Result<Plan, ReadError> {
        log_on_error!(self.read_plan(), ReadError, "get", "plan")
    }

    async fn save_plan(&self, plan: &Plan) -> Result<(), UpdateError> {
        log_on_error!(
            self.repository.write_plan(plan),
            UpdateError,
            "save",
            "plan"
        )
    }
}

impl<R: RoutineRepository> Service<R> {
    async fn add_routine(&self, name: Name, plan: Plan) -> Result<Routine, CreateError> {
        let mut routines = self.repository.read_routines().await?;
        if !routine_name_available(&routines, &name, None) {
            return Err(CreateError::Conflict);
        }
        let routine = Routine { name, plan };
        routines.push(routine.clone());
        self.repository.write_routines(&routines).await?;
        Ok(routine)
    }

    async fn modify_routine_name(
        &self,
        name: &Name,
        new_name: Name,
    ) -> Result<Routine, UpdateError> {
        let mut routines = self.repository.read_routines().await?;
        let Some(index) = routines.iter().position(|r| r.name == *name) else {
            return Err(UpdateError::NotFound);
        };
        if !routine_name_available(&routines, &new_name, Some(name)) {
            return Err(UpdateError::Conflict);
        }
        routines[index].name = new_name.clone();
        self.repository.write_routines(&routines).await?;
        if self.repository.read_selected_routine().await?.as_ref() == Some(name) {
            self.repository
                .write_selected_routine(Some(&new_name))
                .await?;
        }
        Ok(routines.swap_remove(index))
    }

    async fn modify_routine(&self, routine: Routine) -> Result<Routine, UpdateError> {
        let mut routines = self.repository.read_routines().await?;
        let Some(existing) = routines.iter_mut().find(|r| r.name == routine.name) else {
            return Err(UpdateError::NotFound);
        };
        existing.plan = routine.plan.clone();
        self.repository.write_routines(&routines).await?;
        Ok(routine)
    }

    async fn remove_routine(&self, name: &Name) -> Result<Name, DeleteError> {
        let mut routines = self.repository.read_routines().await?;
        let Some(index) = routines.iter().position(|r| r.name == *name) else {
            return Err(DeleteError::NotFound);
        };
        let routine = routines.remove(index);
        self.repository.write_routines(&routines).await?;
        if self.repository.read_selected_routine().await?.as_ref() == Some(name) {
            self.repository.write_selected_routine(None).await?;
        }
        Ok(routine.name)
    }
}

impl<R: RoutineRepository> RoutineService for Service<R> {
    async fn get_routines(&self) -> Result<Vec<Routine>, ReadError> {
        log_on_error!(
            self.repository.read_routines(),
            ReadError,
            "get",
            "routines"
        )
    }

    async fn create_routine(&self, name: Name, plan: Plan) -> Result<Routine, CreateError> {
        log_on_error!(
            self.add_routine(name, plan),
            CreateError,
            "create",
            "routine"
        )
    }

    async fn rename_routine(&self, name: &Name, new_name: Name) -> Result<Routine, UpdateError> {
        log_on_error!(
            self.modify_routine_name(name, new_name),
            UpdateError,
            "rename",
            "routine"
        )
    }

    async fn replace_routine(&self, routine: Routine) -> Result<Routine, UpdateError> {
        log_on_error!(
            self.modify_routine(routine),
            UpdateError,
            "replace",
            "routine"
        )
    }

    async fn delete_routine(&self, name: &Name) -> Result<Name, DeleteError> {
        log_on_error!(
            self.remove_routine(name),
            DeleteError,
            "delete",
            "routine"
        )
    }

    async fn get_selected_routine(&self) -> Result<Option<Name>, ReadError> {
        log_on_error!(
            self.repository.read_selected_routine(),
            ReadError,
            "get",
            "selected routine"
        )
    }

    async fn select_routine(&self, name: Option<&Name>) -> Result<(), UpdateError> {
        log_on_error!(
            self.repository.write_selected_routine(name),
            UpdateError,
            "select",
            "routine"
        )
    }
}
