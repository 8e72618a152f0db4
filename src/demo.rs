//! Demo walk-through of every prompt and display helper.

use crate::{
    error::Result,
    prompt::{Session, Terminal},
};

pub const TITLE: &str = "EJEMPLO DE APLICACIÓN EN CONSOLA";

pub const SUMMARY: &str = "Este es un ejemplo de aplicación en consola hecho con Rust.
En esta aplicación, podrás probar algunas de las funciones de utilidades de consola que ofrece esta biblioteca. Las utilidades abarcan principalmente validación de datos, pero se incluyen también algunas herramientas de despliegue de información en pantalla.";

pub const STRING_OPTIONS: [&str; 5] =
    ["Opción 1", "Opción 2", "Opción 3", "Opción 4", "Opción 5"];
pub const INT_OPTIONS: [i32; 7] = [2, 3, 5, 7, 11, 13, 17];
pub const DECIMAL_OPTIONS: [f64; 3] = [-23.0, 0.1, 7.9];

pub const EXIT_QUESTION: &str = "¿Deseas salir de la aplicación?";
pub const FAREWELL: &str = "¡Adiós!";

/// Greets, runs one pass through each prompt until the user confirms exit,
/// then says goodbye.
pub fn run<T: Terminal>(session: &Session<T>) -> Result<()> {
    session.greeting(TITLE, SUMMARY)?;

    let mut rounds = 0usize;
    loop {
        rounds += 1;
        log::info!("Starting demo round {rounds}");
        round(session)?;

        session.print("Confirmación de acciones")?;
        if session.confirm(EXIT_QUESTION)? {
            break;
        }
    }

    log::info!("Demo finished after {rounds} round(s)");
    session.farewell(FAREWELL)
}

fn round<T: Terminal>(session: &Session<T>) -> Result<()> {
    session.print("Lectura de texto")?;
    let text = session.read_string("Ingresa algo de texto")?;
    session.alert(&format!("Texto ingresado: {text}"))?;

    session.print("Lectura de números enteros")?;
    let int = session.read_int("Ingresa un número entero", None)?;
    session.alert(&format!("Número ingresado: {int}"))?;

    session.print("Lectura de números decimales")?;
    let decimal = session.read_decimal("Ingresa un número decimal", None)?;
    session.alert(&format!("Número ingresado: {decimal}"))?;

    session.print("Lectura de texto")?;
    let text_option = session.read_option("Opciones de texto", &STRING_OPTIONS)?;
    session.alert(&format!("Texto seleccionado: {text_option}"))?;

    session.print("Lectura de números enteros")?;
    let int_option = session.read_option("Opciones de números enteros", &INT_OPTIONS)?;
    session.alert(&format!("Número seleccionado: {int_option}"))?;

    session.print("Lectura de números decimales")?;
    let decimal_option =
        session.read_option("Opciones de números decimales", &DECIMAL_OPTIONS)?;
    session.alert(&format!("Número seleccionado: {decimal_option}"))
}
