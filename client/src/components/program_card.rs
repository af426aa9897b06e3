//! Workout program summary card and detail view.
//!
//! DESIGN
//! ======
//! Exercises show repetitions only when counted and time only when timed,
//! matching how trainers enter them.

use leptos::prelude::*;

use crate::net::types::{Exercise, WorkoutProgram};
use crate::state::workout::exercise_count_label;

/// Clickable summary card for one program.
#[component]
pub fn ProgramCard(program: WorkoutProgram, on_select: Callback<WorkoutProgram>) -> impl IntoView {
    let count = exercise_count_label(program.exercises.len());
    let name = program.name.clone();
    let description = program.description.clone();
    view! {
        <div class="program-card" on:click=move |_| on_select.run(program.clone())>
            <div class="program-card__header">
                <h2>{name}</h2>
                <span class="program-card__count">{count}</span>
            </div>
            <p class="program-card__description">{description}</p>
            <div class="program-card__footer">
                <span>"View Details"</span>
            </div>
        </div>
    }
}

/// Full program with its exercises and a back action.
#[component]
pub fn ProgramDetail(program: WorkoutProgram, on_back: Callback<()>) -> impl IntoView {
    view! {
        <div class="program-detail">
            <button class="btn program-detail__back" on:click=move |_| on_back.run(())>
                "\u{2190} Back to Programs"
            </button>
            <h2>{program.name}</h2>
            <p class="program-detail__description">{program.description}</p>
            <h3>"Exercises"</h3>
            <ExerciseList exercises=program.exercises/>
        </div>
    }
}

/// Exercise rows for a program.
#[component]
pub fn ExerciseList(exercises: Vec<Exercise>) -> impl IntoView {
    view! {
        <div class="exercise-list">
            {exercises.into_iter().map(|exercise| view! { <ExerciseRow exercise=exercise/> }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn ExerciseRow(exercise: Exercise) -> impl IntoView {
    let time = exercise.time_label().map(str::to_owned);
    let repetitions = exercise.repetitions;
    view! {
        <div class="exercise-row">
            <h4>{exercise.name}</h4>
            <p>{exercise.description}</p>
            <div class="exercise-row__stats">
                <span>{format!("Sets: {}", exercise.sets)}</span>
                {(repetitions > 0).then(|| view! { <span>{format!("Reps: {repetitions}")}</span> })}
                {time.map(|time| view! { <span>{format!("Time: {time}")}</span> })}
            </div>
        </div>
    }
}
