//! Fixed file contents written by the scaffolder.
//!
//! Every payload starts with a newline and is written byte for byte.

/// FastAPI entry point with a hello-world route.
pub const MAIN_PY: &str = r#"
from fastapi import FastAPI

app = FastAPI()

@app.get("/")
def read_root():
    return {"Hello": "World"}
"#;

/// Poetry manifest for the backend service.
pub const PYPROJECT_TOML: &str = r#"
[tool.poetry]
name = "backend"
version = "0.1.0"
description = ""
authors = ["Your Name <you@example.com>"]

[tool.poetry.dependencies]
python = "^3.9"
fastapi = "^0.68.0"
uvicorn = "^0.15.0"

[tool.poetry.dev-dependencies]
pytest = "^6.2.5"

[build-system]
requires = ["poetry-core>=1.0.0"]
build-backend = "poetry.core.masonry.api"
"#;

/// flake8 settings matching black's line length.
pub const FLAKE8: &str = r#"
[flake8]
max-line-length = 88
extend-ignore = E203, E266, E501, W503
"#;

pub const FRONTEND_DOCKERFILE: &str = r#"
FROM node:14

WORKDIR /app

COPY frontend/package*.json ./
RUN npm install

COPY frontend .

CMD ["npm", "run", "dev"]
"#;

/// The poetry install step is a single `RUN` line.
pub const BACKEND_DOCKERFILE: &str = r#"
FROM python:3.9

WORKDIR /app

RUN pip install poetry

COPY backend/pyproject.toml backend/poetry.lock ./
RUN poetry config virtualenvs.create false   && poetry install --no-interaction --no-ansi

COPY backend .

CMD ["poetry", "run", "uvicorn", "app.main:app", "--host", "0.0.0.0", "--reload"]
"#;

/// Two services: `frontend` on 3000 and `backend` on 8000.
pub const DOCKER_COMPOSE_YML: &str = r#"
version: '3'
services:
  frontend:
    build:
      context: .
      dockerfile: docker/frontend.Dockerfile
    ports:
      - "3000:3000"
    volumes:
      - ./frontend:/app
    environment:
      - NODE_ENV=development

  backend:
    build:
      context: .
      dockerfile: docker/backend.Dockerfile
    ports:
      - "8000:8000"
    volumes:
      - ./backend:/app
    environment:
      - PYTHONUNBUFFERED=1
"#;

pub const GITIGNORE: &str = r#"
# Node.js
node_modules/
.next/

# Python
__pycache__/
*.pyc
.pytest_cache/

# Environment
.env

# IDEs
.vscode/
.idea/

# Misc
*.log
"#;

pub const ENV_EXAMPLE: &str = r#"
FRONTEND_URL=http://localhost:3000
BACKEND_URL=http://localhost:8000
"#;

/// Project readme. The prose is Japanese and written as is.
pub const README_MD: &str = r#"
# プロジェクト名

このプロジェクトは、Next.jsフロントエンドとFastAPIバックエンドを使用しています。

## セットアップ

1. フロントエンドのセットアップ:
   ```
   npx create-next-app frontend
   cd frontend
   npm install
   ```

2. バックエンドのセットアップ:
   ```
   cd backend
   poetry install
   ```

3. 環境変数の設定:
   `.env.example`をコピーして`.env`を作成し、必要な値を設定してください。

## 開発サーバーの起動

- フロントエンド: `cd frontend && npm run dev`
- バックエンド: `cd backend && poetry run uvicorn app.main:app --reload`

## ビルドと本番環境での実行

- フロントエンド:
  ```
  cd frontend
  npm run build
  npm run start
  ```

- バックエンド:
  ```
  cd backend
  poetry run uvicorn app.main:app
  ```

または、Docker Composeを使用:
docker-compose up

## テスト

- フロントエンド: `cd frontend && npm test`
- バックエンド: `cd backend && poetry run pytest`
"#;

pub const CHANGELOG_MD: &str = r#"
# Changelog

All notable changes to this project will be documented in this file.

## [Unreleased]

- Initial project setup
"#;

/// Recipes are indented with tabs, as make requires.
pub const MAKEFILE: &str = r#"
run-frontend:
	cd frontend && npm run dev

run-backend:
	cd backend && poetry run uvicorn app.main:app --reload

docker-up:
	docker-compose up

docker-down:
	docker-compose down
"#;

/// pre-commit hooks for whitespace, yaml, black and flake8.
pub const PRE_COMMIT_CONFIG_YAML: &str = r#"
repos:
-   repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v3.4.0
    hooks:
    -   id: trailing-whitespace
    -   id: end-of-file-fixer
    -   id: check-yaml
    -   id: check-added-large-files
-   repo: https://github.com/psf/black
    rev: 21.5b1
    hooks:
    -   id: black
-   repo: https://github.com/PyCQA/flake8
    rev: 3.9.2
    hooks:
    -   id: flake8
"#;
