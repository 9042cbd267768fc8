use crate::{layout::Layout, templates};

/// The Next.js + FastAPI project layout.
///
/// `frontend/` is left empty; it is populated later by `create-next-app`.
pub fn fullstack() -> Layout {
    Layout::new()
        .directory(&["frontend"])
        .directory(&["backend"])
        .directory(&["backend", "app"])
        .directory(&["backend", "app", "api"])
        .directory(&["backend", "app", "models"])
        .directory(&["backend", "app", "schemas"])
        .directory(&["backend", "tests"])
        .directory(&["docker"])
        .file(&["backend", "app", "main.py"], templates::MAIN_PY)
        .file(&["backend", "pyproject.toml"], templates::PYPROJECT_TOML)
        .file(&["backend", ".flake8"], templates::FLAKE8)
        .file(&["docker", "frontend.Dockerfile"], templates::FRONTEND_DOCKERFILE)
        .file(&["docker", "backend.Dockerfile"], templates::BACKEND_DOCKERFILE)
        .file(&["docker-compose.yml"], templates::DOCKER_COMPOSE_YML)
        .file(&[".gitignore"], templates::GITIGNORE)
        .file(&[".env.example"], templates::ENV_EXAMPLE)
        .file(&["README.md"], templates::README_MD)
        .file(&["CHANGELOG.md"], templates::CHANGELOG_MD)
        .file(&["Makefile"], templates::MAKEFILE)
        .file(&[".pre-commit-config.yaml"], templates::PRE_COMMIT_CONFIG_YAML)
}
