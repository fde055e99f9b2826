use crate::{domain::department::entities::Department, entity::department};

impl From<&department::Model> for Department {
    fn from(model: &department::Model) -> Self {
        Self {
            department_id: model.department_id,
            name: model.name.clone(),
        }
    }
}

impl From<department::Model> for Department {
    fn from(model: department::Model) -> Self {
        Self {
            department_id: model.department_id,
            name: model.name,
        }
    }
}
