//! Project content
//!
//! The built-in content for "El País de los Sueños Despiertos", and loading of
//! replacement content from a JSON or YAML file.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::error::{DossierError, DossierResult};
use crate::models::project::DIRECTOR_ROLE;
use crate::models::{AudienceShare, ContactInfo, Credit, Phase, Project, WeeklyEntry};

/// Load project content from `path`, or the built-in content when `None`
///
/// Files ending in `.yaml`/`.yml` are read as YAML, anything else as JSON.
pub fn load_project(path: Option<&Path>) -> DossierResult<Project> {
    let Some(path) = path else {
        return Ok(default_project());
    };

    debug!(path = %path.display(), "loading project content");
    let file = File::open(path).map_err(|e| {
        DossierError::Config(format!(
            "Failed to open content file {}: {}",
            path.display(),
            e
        ))
    })?;
    let reader = BufReader::new(file);

    let project = if is_yaml(path) {
        serde_yaml::from_reader(reader)?
    } else {
        serde_json::from_reader(reader)?
    };
    Ok(project)
}

pub(crate) fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
        .unwrap_or(false)
}

fn phase(name: &str, duration: &str, description: &str, responsible: &str, outcome: &str) -> Phase {
    Phase {
        name: name.into(),
        duration: duration.into(),
        description: description.into(),
        responsible: responsible.into(),
        outcome: outcome.into(),
    }
}

fn week(week: u32, activity: &str, responsible: &str, goal: &str) -> WeeklyEntry {
    WeeklyEntry {
        week,
        activity: activity.into(),
        responsible: responsible.into(),
        goal: goal.into(),
        status: "Planeado".into(),
    }
}

fn credit(role: &str, names: &str) -> Credit {
    Credit {
        role: role.into(),
        names: names.into(),
    }
}

fn share(venue: &str, percent: u32) -> AudienceShare {
    AudienceShare {
        venue: venue.into(),
        percent,
    }
}

/// The built-in project content
pub fn default_project() -> Project {
    Project {
        title: "El País de los Sueños Despiertos".into(),
        subtitle: "Proyecto interdisciplinario — danza, VR, IA y artes visuales".into(),
        description: "El País de los Sueños Despiertos es una experiencia escénica inmersiva \
                      que integra danza, realidad virtual e inteligencia artificial. La obra \
                      invita a niños y niñas a explorar mundos oníricos donde la tierra, la \
                      energía y el cuerpo se entrelazan en formas simbólicas y poéticas."
            .into(),
        general_objective: "Promover el desarrollo de la creatividad e imaginación infantil \
                            mediante la integración entre arte y tecnología, generando \
                            experiencias lúdicas, seguras y sensoriales que conecten el \
                            movimiento corporal con paisajes virtuales y colectivos."
            .into(),
        objectives: vec![
            "Diseñar actividades interactivas que combinen recursos tecnológicos y expresiones \
             artísticas para estimular la participación activa de los niños."
                .into(),
            "Fomentar el uso consciente y creativo de herramientas digitales como medios de \
             expresión y descubrimiento personal."
                .into(),
            "Evaluar el impacto del proyecto en el fortalecimiento de la imaginación, la \
             curiosidad y la capacidad de creación en los participantes."
                .into(),
        ],
        phases: vec![
            phase(
                "Fase 1: Exploración e investigación",
                "Mes 1-6",
                "Investigación, pruebas y diseño inicial",
                "Dirección + equipo artístico y técnico",
                "Bases conceptuales definidas",
            ),
            phase(
                "Fase 2: Creación y composición escénica",
                "Mes 7-12",
                "Desarrollo coreográfico, animación 3D y programación IA",
                "Todo el equipo",
                "Prototipo y escenas compuestas",
            ),
            phase(
                "Fase 3: Integración, montaje y estreno",
                "Mes 13-18",
                "Montaje técnico, ensayos y presentación final",
                "Todo el equipo",
                "Obra final presentada y evaluada",
            ),
        ],
        weekly: vec![
            week(
                1,
                "Investigación conceptual y estética",
                "Dirección y equipo artístico",
                "Referentes investigados",
            ),
            week(
                7,
                "Exploración corporal y sensorial",
                "Intérpretes y dirección",
                "Secuencias iniciales",
            ),
            week(
                13,
                "Pruebas iniciales de VR e IA",
                "Equipo técnico",
                "Dispositivos configurados",
            ),
            week(
                25,
                "Composición coreográfica y digital",
                "Dirección, intérpretes y técnicos",
                "Escenas en borrador",
            ),
            week(
                31,
                "Modelado y animación 3D",
                "Artista 3D / VR",
                "Ambientes en desarrollo",
            ),
            week(
                49,
                "Montaje escénico y técnico",
                "Dirección + técnicos",
                "Sistemas funcionando",
            ),
            week(
                61,
                "Estreno y mediación con público infantil",
                "Producción + mediación",
                "Presentación al público",
            ),
        ],
        credits: vec![
            credit(DIRECTOR_ROLE, "Jonathan Xavier Pallo Ávila (La JomPa)"),
            credit("Música", "Marcelo"),
            credit("Diseño visual", "Fernanda Lara"),
            credit("Concepto tecnológico", "Jonathan Pallo"),
            credit(
                "Intérpretes",
                "Melany Sancan, Laysing Chin, Dante Mullo, Andrew Mora",
            ),
            credit("Producción", "Jonathan Pallo, Uartes"),
            credit("Colaboradores", "—"),
        ],
        contact: ContactInfo {
            email: "3l.j0m.pa@gmail.com".into(),
            social: "@la_jompa".into(),
            phone: Some("+5930978967253".into()),
        },
        audience_estimate: "Estimación: 800 - 1500 espectadores en la primera etapa; talleres \
                            y funciones en centros educativos y festivales."
            .into(),
        audience_reach: vec![
            share("Centros educativos", 45),
            share("Familias", 30),
            share("Festivales y espacios", 15),
            share("Instituciones/ONGs", 10),
        ],
    }
}
