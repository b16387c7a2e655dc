use job_finder_common::JobRecommendation;
use leptos::*;

const COLUMNS: [&str; 4] = ["Title", "Company", "Score", "Action"];

#[component]
pub fn RecommendationRow(cx: Scope, job: JobRecommendation) -> impl IntoView {
    let score = job.score_label();
    view! { cx,
        <tr>
            <td>
                <a href=job.url.clone() target="_blank" rel="noopener noreferrer">{job.title}</a>
            </td>
            <td>{job.company}</td>
            <td>{score}</td>
            <td>
                <a href=job.url target="_blank" rel="noopener noreferrer" class="btn btn-sm btn-primary">
                    "Apply"
                </a>
            </td>
        </tr>
    }
}

/// Striped results table, hidden while there is nothing to show
#[component]
pub fn RecommendationsTable(
    cx: Scope,
    #[prop(into)] recommendations: Signal<Vec<JobRecommendation>>,
) -> impl IntoView {
    move || {
        recommendations.with(|jobs| {
            (!jobs.is_empty()).then(|| {
                let rows = jobs
                    .iter()
                    .cloned()
                    .map(|job| view! { cx, <RecommendationRow job=job/> })
                    .collect::<Vec<_>>();
                view! { cx,
                    <div class="mt-4">
                        <h3>"Job Recommendations"</h3>
                        <table class="table table-striped">
                            <thead>
                                <tr>
                                {COLUMNS.iter()
                                    .map(|c| view! { cx, <th>{*c}</th> })
                                    .collect::<Vec<_>>()}
                                </tr>
                            </thead>
                            <tbody>
                            {rows}
                            </tbody>
                        </table>
                    </div>
                }
            })
        })
    }
}
