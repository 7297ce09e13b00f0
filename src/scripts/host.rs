//! Sandboxed execution host seam.
//!
//! The runner only needs "run this program against this input and give me
//! the output text back"; the trait keeps the actual engine pluggable. The
//! default host runs programs in a restricted Lua runtime.

use anyhow::Context;
use async_trait::async_trait;
use mlua::{Lua, LuaOptions, StdLib};

/// External execution engine for user-authored scripts. Hosts keep no
/// state between calls.
#[async_trait]
pub trait ExecutionHost: Send + Sync {
    /// Execute a complete program (harness plus user script) with `input`
    /// bound, returning the final `output` value as text.
    async fn execute(&self, program: &str, input: &str) -> anyhow::Result<String>;
}

/// Lua-backed host. Each call builds a fresh runtime with a restricted
/// stdlib (no io, os, or debug) and a memory cap, binds `input` as a
/// global, runs the program, and reads back the `output` global.
pub struct LuaHost;

#[async_trait]
impl ExecutionHost for LuaHost {
    async fn execute(&self, program: &str, input: &str) -> anyhow::Result<String> {
        let program = program.to_string();
        let input = input.to_string();
        // Lua is not async; run it on a blocking thread.
        tokio::task::spawn_blocking(move || run_program(&program, &input))
            .await
            .context("execution task panicked")?
    }
}

fn run_program(program: &str, input: &str) -> anyhow::Result<String> {
    let lua = Lua::new_with(
        StdLib::TABLE | StdLib::STRING | StdLib::MATH | StdLib::UTF8,
        LuaOptions::default(),
    )
    .context("failed to create Lua runtime")?;
    lua.set_memory_limit(64 * 1024 * 1024)?;

    lua.globals()
        .set("input", input)
        .context("failed to bind input")?;
    lua.load(program)
        .exec()
        .context("script execution failed")?;

    let output: mlua::Value = lua
        .globals()
        .get("output")
        .context("script produced no output binding")?;
    match output {
        mlua::Value::Nil => Ok(String::new()),
        mlua::Value::String(s) => Ok(s.to_str()?.to_string()),
        mlua::Value::Integer(i) => Ok(i.to_string()),
        mlua::Value::Number(n) => Ok(n.to_string()),
        mlua::Value::Boolean(b) => Ok(b.to_string()),
        other => anyhow::bail!("output has unsupported type {}", other.type_name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn runs_a_simple_program() {
        let host = LuaHost;
        let output = host
            .execute("output = string.upper(input)", "hello")
            .await
            .unwrap();
        assert_eq!(output, "HELLO");
    }

    #[tokio::test]
    async fn numeric_output_is_rendered_as_text() {
        let host = LuaHost;
        let output = host.execute("output = 1 + 2", "").await.unwrap();
        assert_eq!(output, "3");
    }

    #[tokio::test]
    async fn missing_output_yields_empty_text() {
        let host = LuaHost;
        let output = host.execute("local x = input", "ignored").await.unwrap();
        assert_eq!(output, "");
    }

    #[tokio::test]
    async fn runtime_errors_surface() {
        let host = LuaHost;
        assert!(host.execute("error('boom')", "").await.is_err());
    }

    #[tokio::test]
    async fn io_library_is_not_available() {
        let host = LuaHost;
        assert!(
            host.execute("output = io.open('/etc/passwd')", "")
                .await
                .is_err()
        );
    }
}
