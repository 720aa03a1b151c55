use crate::{
    constants::roadmap_templates::{
        phase_templates, PhaseTemplate, ARTICLES, BOOKS, DEFAULT_IMPROVEMENTS,
        DEFAULT_PRIORITY_CONCEPTS, DEFAULT_STRENGTHS, EASY_PROBLEMS, GENERAL_RECOMMENDATIONS,
        HARD_PROBLEMS, MEDIUM_PROBLEMS, MILESTONES, MOTIVATIONAL_TIPS, PRACTICE_APPROACH,
        PRACTICE_SITES, PROJECTS, VIDEOS, WEEK_FOUR_FOCUS, WEEK_FOUR_MILESTONE, WEEK_TEMPLATES,
        WEEK_THREE_MILESTONE, WEEK_TWO_MILESTONE,
    },
    models::domain::{
        roadmap::{Milestone, Phase, PracticeStrategy, PriorityConcept, Resources, WeekPlan},
        Answer, AnswerLevel, Roadmap, ScoreSummary,
    },
};

const MAX_STRENGTHS: usize = 4;
const MAX_IMPROVEMENTS: usize = 5;
const MAX_PRIORITY_CONCEPTS: usize = 5;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn questions_at(answers: &[Answer], level: AnswerLevel) -> Vec<String> {
    answers
        .iter()
        .filter(|a| a.answer == level)
        .map(|a| a.question.clone())
        .collect()
}

fn concept(phases: &[PhaseTemplate], phase: usize, index: usize) -> Option<&'static str> {
    phases.get(phase)?.concepts.get(index).copied()
}

fn weekly_plan(phases: &[PhaseTemplate]) -> Vec<WeekPlan> {
    let first = concept(phases, 0, 0);
    let focus = [
        first.unwrap_or("Foundation"),
        concept(phases, 0, 1).unwrap_or("Practice"),
        concept(phases, 1, 0).unwrap_or("Advanced Practice"),
        WEEK_FOUR_FOCUS,
    ];
    let milestones = [
        format!("Understand core concepts of {}", first.unwrap_or("the fundamentals")),
        WEEK_TWO_MILESTONE.to_string(),
        WEEK_THREE_MILESTONE.to_string(),
        WEEK_FOUR_MILESTONE.to_string(),
    ];

    WEEK_TEMPLATES
        .iter()
        .zip(focus)
        .zip(milestones)
        .enumerate()
        .map(|(i, ((template, focus), milestone))| WeekPlan {
            week: i as u32 + 1,
            focus: focus.to_string(),
            daily_tasks: strings(template.daily_tasks),
            practice_problems: strings(template.practice_problems),
            milestone,
        })
        .collect()
}

fn priority_concepts(phases: &[PhaseTemplate]) -> Vec<PriorityConcept> {
    let concepts = phases
        .first()
        .map_or(DEFAULT_PRIORITY_CONCEPTS, |phase| phase.concepts);

    concepts
        .iter()
        .take(MAX_PRIORITY_CONCEPTS)
        .map(|c| PriorityConcept {
            concept: c.to_string(),
            why: "Essential foundation".to_string(),
            time_to_learn: "2-3 days".to_string(),
            prerequisites: "None".to_string(),
        })
        .collect()
}

/// Builds a complete roadmap without calling out.
///
/// Pure: the same answers always give the same document. Only the overview,
/// current level, phases, weekly focus and first recommendation depend on the
/// answers; everything else is shared curated content.
pub fn build_fallback_roadmap(answers: &[Answer]) -> Roadmap {
    let summary = ScoreSummary::from_answers(answers);
    let level = summary.level;
    let templates = phase_templates(level);

    let known_well = questions_at(answers, AnswerLevel::KnowsWell);
    let not_known = questions_at(answers, AnswerLevel::DoesNotKnow);

    let phases = templates
        .iter()
        .map(|t| Phase {
            name: t.name.to_string(),
            duration: t.duration.to_string(),
            concepts: strings(t.concepts),
            goals: strings(t.goals),
            description: t.description.to_string(),
        })
        .collect();

    let strengths = if known_well.is_empty() {
        strings(DEFAULT_STRENGTHS)
    } else {
        known_well.iter().take(MAX_STRENGTHS).cloned().collect()
    };
    let improvements = if not_known.is_empty() {
        strings(DEFAULT_IMPROVEMENTS)
    } else {
        not_known.iter().take(MAX_IMPROVEMENTS).cloned().collect()
    };

    let mut recommendations = vec![format!(
        "Focus on {} level concepts appropriate for your current knowledge",
        level.as_str().to_lowercase()
    )];
    recommendations.extend(strings(GENERAL_RECOMMENDATIONS));

    Roadmap {
        overview: format!(
            "Based on your assessment score of {:.1}%, you're at the {} level in Data Structures and Algorithms. \
             This personalized roadmap will guide you through systematic improvement tailored to your current knowledge.",
            summary.percentage, level
        ),
        current_level: format!(
            "{} - You've demonstrated solid understanding in {} concepts and have room to grow in {} areas. \
             With focused practice, you'll make significant progress.",
            level,
            known_well.len(),
            not_known.len()
        ),
        phases,
        weekly_plan: weekly_plan(templates),
        resources: Resources {
            videos: strings(VIDEOS),
            articles: strings(ARTICLES),
            practice: strings(PRACTICE_SITES),
            books: strings(BOOKS),
        },
        priority_concepts: priority_concepts(templates),
        milestones: MILESTONES
            .iter()
            .map(|(title, description, timeframe, criteria)| Milestone {
                title: title.to_string(),
                description: description.to_string(),
                timeframe: timeframe.to_string(),
                criteria: criteria.to_string(),
            })
            .collect(),
        practice_strategy: PracticeStrategy {
            approach: PRACTICE_APPROACH.to_string(),
            easy_problems: strings(EASY_PROBLEMS),
            medium_problems: strings(MEDIUM_PROBLEMS),
            hard_problems: strings(HARD_PROBLEMS),
            projects: strings(PROJECTS),
        },
        motivational_tips: strings(MOTIVATIONAL_TIPS),
        strengths,
        improvements,
        recommendations,
    }
}
