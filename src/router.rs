// ============================================================================
// ROUTER - Rutas basadas en el hash de la URL
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Courses,
    Course(String),
    Assignments,
    Review(String),
    Insights,
    Assistant,
    Settings,
}

impl Route {
    /// Parsea el hash de la URL ("#/courses/2" -> Course("2")).
    /// Rutas desconocidas o vacías van al dashboard; el gate de sesión
    /// decide después si eso acaba en login.
    pub fn parse(hash: &str) -> Route {
        let path = hash.trim_start_matches('#');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["login"] => Route::Login,
            [] | ["dashboard"] => Route::Dashboard,
            ["courses"] => Route::Courses,
            ["courses", id] => Route::Course((*id).to_string()),
            ["assignments"] => Route::Assignments,
            ["assignments", id] => Route::Review((*id).to_string()),
            ["insights"] => Route::Insights,
            ["assistant"] => Route::Assistant,
            ["settings"] => Route::Settings,
            _ => Route::Dashboard,
        }
    }

    pub fn hash(&self) -> String {
        match self {
            Route::Login => "#/login".to_string(),
            Route::Dashboard => "#/dashboard".to_string(),
            Route::Courses => "#/courses".to_string(),
            Route::Course(id) => format!("#/courses/{}", id),
            Route::Assignments => "#/assignments".to_string(),
            Route::Review(id) => format!("#/assignments/{}", id),
            Route::Insights => "#/insights".to_string(),
            Route::Assistant => "#/assistant".to_string(),
            Route::Settings => "#/settings".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_routes() {
        assert_eq!(Route::parse("#/login"), Route::Login);
        assert_eq!(Route::parse("#/dashboard"), Route::Dashboard);
        assert_eq!(Route::parse("#/courses"), Route::Courses);
        assert_eq!(Route::parse("#/courses/2"), Route::Course("2".to_string()));
        assert_eq!(Route::parse("#/assignments/1"), Route::Review("1".to_string()));
        assert_eq!(Route::parse("#/settings"), Route::Settings);
    }

    #[test]
    fn empty_and_unknown_hashes_go_to_dashboard() {
        assert_eq!(Route::parse(""), Route::Dashboard);
        assert_eq!(Route::parse("#/"), Route::Dashboard);
        assert_eq!(Route::parse("#/no/existe/esto"), Route::Dashboard);
    }

    #[test]
    fn hash_round_trips() {
        let routes = [
            Route::Login,
            Route::Dashboard,
            Route::Courses,
            Route::Course("3".to_string()),
            Route::Assignments,
            Route::Review("5".to_string()),
            Route::Insights,
            Route::Assistant,
            Route::Settings,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.hash()), route);
        }
    }
}
