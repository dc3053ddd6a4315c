//! # Demo Scenarios
//!
//! Walk-throughs of the agent core: tool calls, goal hierarchies, custom
//! tools and the memory store.

use autogoal_agent::Agent;
use autogoal_core::{AgentConfig, Goal, ToolParams};
use autogoal_memory::{Importance, MemoryEntry};
use autogoal_tools::{AggregatorTool, StringTool};
use clap::ValueEnum;
use serde_json::{Value, json};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoScenario {
    /// One goal plus a couple of calculator calls
    Simple,
    /// A goal with ordered sub-goals
    Hierarchical,
    /// Custom tools and a multi-step workflow
    Advanced,
    /// Short-term and long-term memory
    Memory,
}

pub fn run_demo(scenario: DemoScenario, config: AgentConfig) {
    match scenario {
        DemoScenario::Simple => simple(config),
        DemoScenario::Hierarchical => hierarchical(config),
        DemoScenario::Advanced => advanced(config),
        DemoScenario::Memory => memory(config),
    }
}

fn calculate(agent: &mut Agent, operation: &str, a: impl Into<Value>, b: impl Into<Value>) -> Value {
    let params = ToolParams::new()
        .with("operation", operation)
        .with("a", a)
        .with("b", b);
    agent
        .execute_tool("calculator", &params)
        .into_result()
        .unwrap_or_else(Value::String)
}

fn print_rule() {
    println!("{}", "=".repeat(50));
}

fn simple(config: AgentConfig) {
    let mut agent = Agent::builder().config(config).name("SimpleAgent").build();
    agent.add_goal(
        Goal::new("Calculate the sum of 10 and 20, then multiply by 3").with_priority(10),
    );

    println!("Demonstrating tool usage:");
    let sum = calculate(&mut agent, "add", 10, 20);
    println!("  10 + 20 = {sum}");
    let product = calculate(&mut agent, "multiply", sum.clone(), 3);
    println!("  {sum} * 3 = {product}");

    print_rule();
    let summary = agent.run(Some(10));
    println!("Run summary: {}", json!(summary));
    println!("Final status: {}", json!(agent.get_status()));
}

fn hierarchical(config: AgentConfig) {
    let mut agent = Agent::builder().config(config).name("HierarchicalAgent").build();
    let main_goal = Goal::new("Plan and execute a mathematical problem")
        .with_priority(10)
        .with_sub_goal(Goal::new("Calculate 5 + 3").with_priority(8))
        .with_sub_goal(Goal::new("Multiply the result by 2").with_priority(7))
        .with_sub_goal(Goal::new("Subtract 4 from the result").with_priority(6));

    println!("Goal hierarchy:");
    println!("Main: {}", main_goal.description());
    for (i, sub_goal) in main_goal.sub_goals().iter().enumerate() {
        println!("  Sub-goal {}: {}", i + 1, sub_goal.description());
    }
    let main_id = agent.add_goal(main_goal);

    print_rule();
    let step1 = calculate(&mut agent, "add", 5, 3);
    println!("Step 1: 5 + 3 = {step1}");
    let step2 = calculate(&mut agent, "multiply", step1.clone(), 2);
    println!("Step 2: {step1} * 2 = {step2}");
    let step3 = calculate(&mut agent, "subtract", step2.clone(), 4);
    println!("Step 3: {step2} - 4 = {step3}");

    print_rule();
    let summary = agent.run(Some(10));
    println!("Run summary: {}", json!(summary));
    if let Some(goal) = agent.goals().get(main_id) {
        println!("Main goal completed: {}", goal.is_completed());
        println!("All sub-goals completed: {}", goal.all_sub_goals_completed());
    }

    println!("Reasoning steps taken: {}", agent.reasoning_history().len());
    for (i, step) in agent.reasoning_history().iter().take(3).enumerate() {
        println!("\nStep {}:\n{step}", i + 1);
    }
}

fn advanced(mut config: AgentConfig) {
    config.enable_reasoning_history = true;
    let mut agent = Agent::builder()
        .config(config)
        .name("AdvancedAgent")
        .tool(Arc::new(StringTool))
        .tool(Arc::new(AggregatorTool))
        .build();

    println!("Available tools:");
    for (name, tool) in agent.tools().get_all_tools() {
        println!("  - {name}: {}", tool.description());
    }

    agent.add_goal(
        Goal::new("Process text data and analyze numeric results")
            .with_priority(10)
            .with_sub_goal(Goal::new("Convert text to uppercase and get length").with_priority(8))
            .with_sub_goal(Goal::new("Analyze numeric data").with_priority(7))
            .with_sub_goal(Goal::new("Perform calculations on aggregated data").with_priority(6)),
    );

    print_rule();
    let text = "Auto-GPT is amazing";
    for operation in ["upper", "length"] {
        let params = ToolParams::new().with("operation", operation).with("text", text);
        let result = agent.execute_tool("string_tool", &params);
        println!("  {operation}('{text}') = {}", result.output_text());
    }

    let numbers = json!([10, 25, 30, 15, 20]);
    let mut average = Value::Null;
    for operation in ["sum", "avg", "max"] {
        let params = ToolParams::new()
            .with("operation", operation)
            .with("numbers", numbers.clone());
        let result = agent.execute_tool("aggregator", &params);
        println!("  {operation}({numbers}) = {}", result.output_text());
        if operation == "avg" {
            average = result.output().cloned().unwrap_or(Value::Null);
        }
    }
    let doubled = calculate(&mut agent, "multiply", average.clone(), 2);
    println!("  {average} * 2 = {doubled}");

    print_rule();
    let summary = agent.run(Some(10));
    println!("Run summary: {}", json!(summary));

    println!("Tool memories:");
    for entry in agent.memory().search_by_tag("tool", true).into_iter().take(5) {
        println!("  - {}", entry.content());
    }

    println!("Last reasoning steps:");
    let history = agent.reasoning_history();
    for step in &history[history.len().saturating_sub(5)..] {
        println!("\n{step}");
    }
    println!("\nFinal status: {}", json!(agent.get_status()));
}

fn memory(config: AgentConfig) {
    let mut agent = Agent::builder().config(config).name("MemoryAgent").build();
    let store = agent.memory_mut();
    store.add_to_short_term(
        MemoryEntry::new("The capital of France is Paris")
            .with_importance(Importance::saturating(8))
            .with_tags(["geography", "fact"]),
    );
    store.add_to_short_term(
        MemoryEntry::new("Rust is a programming language")
            .with_importance(Importance::saturating(7))
            .with_tags(["programming", "fact"]),
    );
    store.add_to_long_term(
        MemoryEntry::new("Always validate user input")
            .with_importance(Importance::saturating(9))
            .with_tags(["programming", "best-practice"]),
    );
    println!(
        "Short-term: {}, long-term: {}",
        store.short_term_len(),
        store.long_term_len()
    );

    print_rule();
    println!("Searching for 'programming':");
    for entry in agent.memory().search("programming", true) {
        println!("  - {} (importance: {})", entry.content(), entry.importance());
    }
    println!("Searching by tag 'fact':");
    for entry in agent.memory().search_by_tag("fact", true) {
        println!("  - {}", entry.content());
    }

    print_rule();
    agent.add_goal(Goal::new("Calculate 15 + 25").with_priority(5));
    agent.add_goal(Goal::new("Echo a message").with_priority(3));
    agent.run(Some(5));

    println!("Memory after goal execution: {}", json!(agent.memory().stats()));
    println!("Recent short-term memories:");
    for entry in agent.memory().recent(3) {
        println!("  - {}", entry.content());
    }
    println!(
        "Goal-related memories: {}",
        agent.memory().search_by_tag("goal", true).len()
    );
}
