// Home page - hero, mission, services carousel, lab projects
use leptos::html;
use leptos::prelude::*;

use crate::components::{Carousel, Footer, Header};
use crate::config::Site;
use crate::content::{self, Project};

const CODE_OVERLAY: &str = r#"Sub AutomateInvoiceProcessing()
    Dim ws As Worksheet
    Dim lastRow As Long
    Dim i As Long

    Set ws = ThisWorkbook.Sheets("Invoices")
    lastRow = ws.Cells(ws.Rows.Count, "A").End(xlUp).Row

    For i = 2 To lastRow
        If ws.Cells(i, 5).Value = "Pending" Then
            ws.Cells(i, 5).Value = "Processed"
            ws.Cells(i, 6).Value = Now()

            Call SendNotification(ws.Cells(i, 1).Value)
        End If
    Next i

    MsgBox "Processing complete: " & (lastRow - 1) & " invoices"
End Sub

Function CalculateTax(amount As Double) As Double
    Const TAX_RATE As Double = 0.15
    CalculateTax = amount * TAX_RATE
End Function

Sub GenerateReport()
    Dim reportDate As Date
    reportDate = Date

    Range("A1").Value = "Financial Report"
    Range("A2").Value = "Generated: " & Format(reportDate, "dd/mm/yyyy")
End Sub"#;

/// (path, fill) of the three mission waves, back to front.
const WAVES: [(&str, &str); 3] = [
    (
        "M0,50 Q150,70 300,50 T600,50 T900,50 T1200,50 L1200,120 L0,120 Z",
        "rgba(255, 255, 255, 0.3)",
    ),
    (
        "M0,60 Q200,40 400,60 T800,60 T1200,60 L1200,120 L0,120 Z",
        "rgba(255, 255, 255, 0.2)",
    ),
    (
        "M0,70 Q250,90 500,70 T1000,70 T1500,70 L1500,120 L0,120 Z",
        "rgba(255, 255, 255, 0.15)",
    ),
];

/// Split `text` for the per-character title animation. Whitespace keeps
/// no index; every other char gets the next one.
pub fn split_chars(text: &str) -> Vec<(Option<usize>, char)> {
    let mut next = 0;
    text.chars()
        .map(|c| {
            if c.is_whitespace() {
                (None, c)
            } else {
                next += 1;
                (Some(next - 1), c)
            }
        })
        .collect()
}

/// Landing page.
#[component]
pub fn HomePage(site: Site) -> impl IntoView {
    let footer = NodeRef::<html::Footer>::new();

    view! {
        <Header base=site.base.clone() contact=footer />
        <main>
            <Hero />
            <Mission />
            {content::slides().map(|slides| view! { <Carousel slides=slides interval=site.autoplay /> })}
            {content::projects().map(|projects| view! { <Projects projects=projects /> })}
        </main>
        <Footer anchor=footer />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero-section">
            <div class="hero-code-overlay" aria-hidden="true">{CODE_OVERLAY}</div>
            <h1 class="shimmer-text">"Boost your Accounting Automation with AI Innovation"</h1>
            <p class="hero-section-paragraph">
                "A leading company combines AI technology with professional accounting expertise"
            </p>
        </section>
    }
}

#[component]
fn Mission() -> impl IntoView {
    let waves = WAVES
        .iter()
        .enumerate()
        .map(|(i, (path, fill))| {
            view! {
                <div class=format!("water-wave water-wave-{}", i + 1)>
                    <svg viewBox="0 0 1200 120" preserveAspectRatio="none">
                        <path d=*path fill=*fill />
                    </svg>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="mission-section">
            {waves}
            <SplitTitle text="Our Mission" />
            <hr class="mission-divider" />
            <div class="mission">
                <p>
                    "In today's digital era, many organizations struggle with outdated operational structures that limit collaboration and innovation. Technology and education are essential to transform how businesses adapt to rapidly changing market demands."
                </p>
                <p>
                    "We leverage AI-driven automation and comprehensive training to revolutionize your operational processes. Our solutions streamline workflows, foster continuous learning, and empower your team to achieve sustainable compliance while driving efficiency and growth."
                </p>
            </div>
        </section>
    }
}

/// Title whose characters animate in one after another.
#[component]
fn SplitTitle(text: &'static str) -> impl IntoView {
    let chars = split_chars(text)
        .into_iter()
        .map(|(index, c)| match index {
            Some(i) => view! {
                <span class="char" data-char=c.to_string() style=format!("--char-index: {i}")>
                    {c.to_string()}
                </span>
            }
            .into_any(),
            None => view! { <span class="whitespace">{c.to_string()}</span> }.into_any(),
        })
        .collect::<Vec<_>>();

    view! {
        <h1 class="mission-title" aria-label=text>
            {chars}
        </h1>
    }
}

#[component]
fn Projects(projects: Vec<Project>) -> impl IntoView {
    // Text, image, image, text: the grid reads as a checkerboard.
    let mut text_boxes = projects.into_iter().map(|project| {
        view! {
            <div class="project">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
            </div>
        }
    });
    let first = text_boxes.next();
    let rest = text_boxes.collect::<Vec<_>>();

    view! {
        <section class="projects-section">
            <h1>"ABC Lab Projects"</h1>
            <div class="project-boxes">
                {first}
                <div class="project project-image-1"></div>
                <div class="project project-image-2"></div>
                {rest}
            </div>
        </section>
    }
}
