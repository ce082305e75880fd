#[cfg(test)]
#[path = "guide_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;

use super::Activity;
use super::Block;
use super::NavLink;
use super::Section;
use super::Step;
use super::TableSpec;

/// The complete walkthrough document. All content is inlined; nothing is
/// created, mutated, or deleted at runtime.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default, Debug)]
pub struct Guide {
    pub title: String,
    pub nav: Vec<NavLink>,
    pub sections: Vec<Section>,
    pub steps: Vec<Step>,
}

impl Guide {
    /// The database normalization guide.
    pub fn walkthrough() -> Guide {
        return Guide {
            title: "Normalización de Bases de Datos".to_string(),
            nav: vec![
                NavLink::new("Introducción", "#introduccion"),
                NavLink::new("Anomalías de datos", "#anomalias"),
                NavLink::new("Las formas normales", "#formas-normales"),
                NavLink::new("Ejemplo interactivo", "#ejemplo-interactivo"),
                NavLink::new("Actividades", "#actividades"),
                NavLink::new("Resumen", "#resumen"),
            ],
            sections: vec![
                Section::new(
                    "introduccion",
                    "Introducción",
                    vec![
                        Block::Paragraph(
                            "La normalización es el proceso de organizar las tablas de una base \
                             de datos relacional para reducir la redundancia y evitar anomalías \
                             al insertar, actualizar o borrar registros. Se aplica en etapas \
                             sucesivas llamadas formas normales."
                                .to_string(),
                        ),
                        Block::Paragraph(
                            "Esta guía recorre el camino desde una tabla sin normalizar hasta la \
                             tercera forma normal, usando un ejemplo de estudiantes, materias y \
                             profesores. Avanza con las flechas y observa cómo el modelo mejora \
                             en cada paso."
                                .to_string(),
                        ),
                    ],
                ),
                Section::new(
                    "anomalias",
                    "Anomalías de datos",
                    vec![
                        Block::Paragraph(
                            "Cuando una tabla mezcla hechos de entidades distintas, los defectos \
                             aparecen tarde o temprano. Las tres anomalías clásicas son las de \
                             inserción, actualización y borrado."
                                .to_string(),
                        ),
                        Block::Table(TableSpec::new(
                            Some("Anomalías clásicas"),
                            &["Anomalía", "Síntoma"],
                            &[
                                &[
                                    "Inserción",
                                    "No se puede registrar una materia sin un estudiante inscrito",
                                ],
                                &[
                                    "Actualización",
                                    "Cambiar un profesor obliga a tocar muchas filas",
                                ],
                                &[
                                    "Borrado",
                                    "Eliminar al último estudiante borra también la materia",
                                ],
                            ],
                        )),
                        Block::Paragraph(
                            "La causa común es la redundancia: el mismo hecho almacenado en más \
                             de un lugar. La normalización ataca esa causa, no los síntomas."
                                .to_string(),
                        ),
                    ],
                ),
                Section::new(
                    "formas-normales",
                    "Las formas normales",
                    vec![
                        Block::Paragraph(
                            "Primera forma normal (1FN): cada celda guarda un valor atómico y no \
                             hay grupos repetidos. Una celda con la lista \"BD, Redes\" viola la \
                             1FN."
                                .to_string(),
                        ),
                        Block::Paragraph(
                            "Segunda forma normal (2FN): además de la 1FN, todo atributo que no \
                             es llave depende de la llave completa, no de una parte. Si la llave \
                             es (estudiante, materia), el profesor depende solo de la materia y \
                             debe salir a su propia tabla."
                                .to_string(),
                        ),
                        Block::Paragraph(
                            "Tercera forma normal (3FN): además de la 2FN, ningún atributo que \
                             no es llave depende de otro atributo que no es llave. Las \
                             dependencias transitivas se eliminan separando entidades."
                                .to_string(),
                        ),
                    ],
                ),
                Section::new(
                    "ejemplo-interactivo",
                    "Ejemplo interactivo",
                    vec![
                        Block::Paragraph(
                            "El panel siguiente muestra el mismo conjunto de datos en cada etapa \
                             de la normalización. Usa Anterior y Siguiente para recorrer los \
                             pasos."
                                .to_string(),
                        ),
                        Block::StepPanel,
                    ],
                ),
                Section::new(
                    "actividades",
                    "Actividades",
                    vec![
                        Block::Paragraph(
                            "Pon a prueba lo aprendido con estos ejercicios.".to_string(),
                        ),
                        Block::Activity(Activity {
                            id: "actividad-grupos-repetidos".to_string(),
                            title: "Actividad 1: grupos repetidos".to_string(),
                            body: "Vuelve al paso inicial del ejemplo y señala qué celdas violan \
                                   la primera forma normal. ¿Qué filas habría que crear para \
                                   corregirlas?"
                                .to_string(),
                        }),
                        Block::Activity(Activity {
                            id: "actividad-dependencias".to_string(),
                            title: "Actividad 2: dependencias".to_string(),
                            body: "En la tabla de la 1FN, escribe las dependencias funcionales \
                                   que observes. ¿Cuáles impiden la segunda forma normal? \
                                   Compara tu respuesta con las tablas del paso 2."
                                .to_string(),
                        }),
                        Block::Activity(Activity {
                            id: "actividad-modelo-propio".to_string(),
                            title: "Actividad 3: tu propio modelo".to_string(),
                            body: "Toma una hoja de cálculo que uses a diario y llévala hasta la \
                                   tercera forma normal siguiendo los mismos pasos del ejemplo."
                                .to_string(),
                        }),
                    ],
                ),
                Section::new(
                    "resumen",
                    "Resumen",
                    vec![Block::Paragraph(
                        "Normalizar es decidir dónde vive cada hecho: una tabla por entidad, una \
                         fila por hecho, una celda por valor. Con la 3FN el ejemplo queda libre \
                         de redundancia y las anomalías desaparecen. Las formas normales \
                         superiores existen, pero para la mayoría de los esquemas este es el \
                         punto de equilibrio."
                            .to_string(),
                    )],
                ),
            ],
            steps: vec![
                Step::new(
                    "Estado Inicial: No Normalizado",
                    "Una sola tabla con grupos repetidos y datos atómicos mezclados. ¡Un \
                     desastre!",
                    vec![TableSpec::new(
                        None,
                        &["Estudiante", "Materias", "Profesor"],
                        &[
                            &["Juan", "BD, Redes", "Ing. Gomez"],
                            &["Maria", "Programación", "Ing. Ruiz"],
                        ],
                    )],
                ),
                Step::new(
                    "1FN: Primera Forma Normal",
                    "Eliminamos grupos repetidos. Ahora cada celda es atómica. Sin embargo, hay \
                     mucha redundancia, ya que repetimos información del estudiante para cada \
                     materia.",
                    vec![TableSpec::new(
                        None,
                        &["Estudiante", "Materia", "Profesor"],
                        &[
                            &["Juan", "BD", "Ing. Gomez"],
                            &["Juan", "Redes", "Ing. Gomez"],
                            &["Maria", "Programación", "Ing. Ruiz"],
                        ],
                    )],
                ),
                Step::new(
                    "2FN: Segunda Forma Normal",
                    "Separamos en tablas según la dependencia de la llave primaria. La tabla \
                     'Materias' ahora solo contiene información de la materia, eliminando la \
                     redundancia de repetir el profesor en cada registro de estudiante.",
                    vec![
                        TableSpec::new(
                            Some("Tabla Estudiantes-Materias"),
                            &["Est_ID", "Mat_ID"],
                            &[&["1", "A"], &["1", "B"]],
                        ),
                        TableSpec::new(
                            Some("Tabla Materias"),
                            &["Mat_ID", "Nombre", "Profesor"],
                            &[&["A", "BD", "Ing. Gomez"]],
                        ),
                    ],
                ),
                Step::new(
                    "3FN: Tercera Forma Normal",
                    "Eliminamos dependencias transitivas. El profesor está asignado a la \
                     materia, independientemente de qué estudiante la tome. Si cambia el \
                     profesor de 'BD', solo actualizamos un registro. ¡Modelo Optimizado!",
                    vec![
                        TableSpec::new(Some("Estudiantes"), &["ID", "Nom"], &[]),
                        TableSpec::new(Some("Materias"), &["ID", "Nom"], &[]),
                        TableSpec::new(Some("Inscripciones"), &["EstID", "MatID"], &[]),
                        TableSpec::new(Some("Profesores"), &["ID", "Nom"], &[]),
                    ],
                ),
            ],
        };
    }
}
