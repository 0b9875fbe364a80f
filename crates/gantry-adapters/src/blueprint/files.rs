//! Verbatim file contents for the built-in monorepo blueprint.
//!
//! `{{PROJECT_NAME}}`-style placeholders are resolved by `RenderContext`;
//! everything else is written byte for byte.

/// Root workspace manifest. The marker line is replaced by member entries.
pub const ROOT_MANIFEST: &str = r#"# {{PROJECT_NAME}} workspace. The member list is maintained by gantry.
[workspace]
resolver = "2"
members = [
    # @gantry:members
]

[workspace.package]
version = "0.1.0"
edition = "2021"
license = "Apache-2.0"

[workspace.dependencies]
anyhow = "1"
thiserror = "2"
bytes = "1"
tokio = { version = "1", features = ["full"] }
hyper = { version = "1", features = ["full"] }
tonic = "0.12"
prost = "0.13"
serde = { version = "1", features = ["derive"] }
serde_json = "1"
tracing = "0.1"
tracing-subscriber = { version = "0.3", features = ["env-filter"] }

[profile.release]
lto = "thin"
codegen-units = 1
"#;

pub const GITIGNORE: &str = r#"/target
**/*.rs.bk
.env
.DS_Store
console/node_modules
console/dist
"#;

pub const README: &str = r#"# {{PROJECT_NAME}}

API gateway monorepo.

## Layout

| Path              | Contents                                      |
|-------------------|-----------------------------------------------|
| `gateway/`        | Data-plane crates and the `gatewayd` binary   |
| `control-plane/`  | Control-plane libraries and services          |
| `console/`        | Web console (stub)                            |
| `contracts/`      | OpenAPI, protobuf and JSON schema contracts   |
| `plugins/`        | Gateway plugins                               |
| `tools/`          | Developer tooling                             |
| `docs/`           | Architecture decision records                 |

## Getting started

```sh
just init
just build
just test
```
"#;

pub const CI_WORKFLOW: &str = r#"name: ci

on:
  push:
    branches: [main]
  pull_request:

jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - uses: dtolnay/rust-toolchain@stable
      - run: cargo build --workspace --all-targets

  test:
    runs-on: ubuntu-latest
    needs: build
    steps:
      - uses: actions/checkout@v4
      - uses: dtolnay/rust-toolchain@stable
      - run: cargo test --workspace
"#;

pub const JUSTFILE: &str = r#"default: build

init:
    rustup component add rustfmt clippy
    cargo fetch

build:
    cargo build --workspace

test:
    cargo test --workspace

fmt:
    cargo fmt --all

lint:
    cargo clippy --workspace --all-targets -- -D warnings

tree:
    cargo tree --workspace --depth 1
"#;

pub const TOOLS_README: &str = r#"# tools

Developer tooling for {{PROJECT_NAME}}. Task entry points live in the root
`Justfile`: `init`, `build`, `test`, `fmt`, `lint`, `tree`.
"#;

pub const ADR_MONOREPO: &str = r#"# 1. Monorepo layout

## Status

Accepted

## Context

{{PROJECT_NAME}} ships a gateway data plane and a control plane that change
together. Contracts between them (admin API, streaming config protocol,
route and plugin schemas) must be versioned with both sides.

## Decision

Keep every component in one Cargo workspace. The data plane lives under
`gateway/`, the control plane under `control-plane/`, shared contracts under
`contracts/`. Each crate is `publish = false`.

## Consequences

- One lockfile and one CI pipeline for all Rust code.
- Contract changes are reviewed in the same change as their consumers.
- The console is built separately and is not a workspace member.
"#;

pub const OPENAPI_ADMIN: &str = r##"openapi: 3.0.3
info:
  title: {{PROJECT_NAME}} admin API
  version: 0.1.0
paths:
  /routes:
    get:
      summary: List routes
      responses:
        "200":
          description: Route list
          content:
            application/json:
              schema:
                type: array
                items:
                  $ref: "#/components/schemas/Route"
components:
  schemas:
    Route:
      type: object
      required: [id, path, upstream]
      properties:
        id:
          type: string
        path:
          type: string
        upstream:
          type: string
"##;

pub const STREAM_PROTO: &str = r#"syntax = "proto3";

package gateway.config.v1;

// Pushes configuration snapshots from the control plane to gateways.
service ConfigStream {
  rpc Subscribe(SubscribeRequest) returns (stream ConfigSnapshot);
}

message SubscribeRequest {
  string node_id = 1;
  uint64 last_version = 2;
}

message ConfigSnapshot {
  uint64 version = 1;
  repeated Route routes = 2;
}

message Route {
  string id = 1;
  string path = 2;
  string upstream = 3;
}
"#;

pub const ROUTE_SCHEMA: &str = r#"{
  "$schema": "https://json-schema.org/draft/2020-12/schema",
  "title": "Route",
  "type": "object",
  "required": ["id", "path", "upstream"],
  "properties": {
    "id": { "type": "string" },
    "path": { "type": "string" },
    "upstream": { "type": "string", "format": "uri" },
    "plugins": { "type": "array", "items": { "type": "string" } }
  }
}
"#;

pub const PLUGIN_SCHEMA: &str = r#"{
  "$schema": "https://json-schema.org/draft/2020-12/schema",
  "title": "Plugin",
  "type": "object",
  "required": ["name", "kind"],
  "properties": {
    "name": { "type": "string" },
    "kind": { "enum": ["wasm", "native"] },
    "config": { "type": "object" }
  }
}
"#;

pub const CONSOLE_README: &str = r#"# console

Web console for {{PROJECT_NAME}}. Not a Cargo workspace member; build it
with the frontend toolchain of your choice.
"#;

pub const CONSOLE_PACKAGE_JSON: &str = r#"{
  "name": "{{PROJECT_NAME_KEBAB}}-console",
  "version": "0.1.0",
  "private": true,
  "scripts": {
    "dev": "echo \"console dev server not configured\"",
    "build": "echo \"console build not configured\""
  }
}
"#;

pub const CONSOLE_INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>{{PROJECT_NAME}} console</title>
  </head>
  <body>
    <main id="app">{{PROJECT_NAME}} console</main>
  </body>
</html>
"#;

pub const PLUGINS_README: &str = r#"# plugins

Gateway plugins, loaded by `gateway/crates/plugin-host`.

- `wasm/`: sandboxed WebAssembly plugins
- `native/`: in-process Rust plugins
"#;
