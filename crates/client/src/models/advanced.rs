//! Models for the advanced file/user/date/report API.
//!
//! The service speaks Spanish on the wire; Rust field names are English and
//! mapped with `#[serde(rename)]`. Payloads whose shape the service does not
//! pin down (statistics blobs) stay as `serde_json::Value`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(day, month, year)` date as stored by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemDate(pub u8, pub u8, pub u16);

impl SystemDate {
    pub fn day(&self) -> u8 {
        self.0
    }

    pub fn month(&self) -> u8 {
        self.1
    }

    pub fn year(&self) -> u16 {
        self.2
    }
}

impl fmt::Display for SystemDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.0, self.1, self.2)
    }
}

// ===== Users =====

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    #[serde(rename = "nombre")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeUserRequest {
    #[serde(rename = "nombre_nuevo")]
    pub new_name: String,
}

/// Session returned by a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    /// Welcome message built by the service.
    #[serde(rename = "mensaje", default)]
    pub welcome: String,
    pub session_id: String,
    #[serde(rename = "usuario_info")]
    pub user: UserInfo,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "nombre_completo")]
    pub full_name: String,
    #[serde(rename = "tipo", default)]
    pub kind: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "ultima_conexion", default)]
    pub last_seen: String,
    #[serde(rename = "sesiones_totales", default)]
    pub total_sessions: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserList {
    #[serde(rename = "usuarios", default)]
    pub users: Vec<serde_json::Value>,
}

// ===== Dates =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateConfigRequest {
    #[serde(rename = "dia")]
    pub day: u8,
    #[serde(rename = "mes")]
    pub month: u8,
    #[serde(rename = "año")]
    pub year: u16,
}

/// Current system date as reported by `GET /date/current`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateConfig {
    #[serde(rename = "fecha_tupla")]
    pub date: SystemDate,
    #[serde(rename = "fecha_formateada", default)]
    pub formatted: String,
    #[serde(rename = "componentes")]
    pub components: DateComponents,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateComponents {
    #[serde(rename = "dia")]
    pub day: u8,
    #[serde(rename = "mes")]
    pub month: u8,
    #[serde(rename = "año")]
    pub year: u16,
}

// ===== Files =====

/// Where a file came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileOrigin {
    #[serde(rename = "predefinido")]
    Predefined,
    #[serde(rename = "usuario")]
    User,
}

impl fmt::Display for FileOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predefined => f.write_str("predefined"),
            Self::User => f.write_str("user"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "fecha_creacion")]
    pub created: SystemDate,
    #[serde(rename = "fecha_modificacion")]
    pub modified: SystemDate,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "tamaño_bytes", default)]
    pub size_bytes: u64,
    #[serde(rename = "solo_lectura", default)]
    pub read_only: bool,
    #[serde(rename = "origen")]
    pub origin: FileOrigin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileListing {
    #[serde(rename = "archivos")]
    pub files: Vec<FileInfo>,
    #[serde(rename = "total_archivos", default)]
    pub total: usize,
    #[serde(rename = "archivos_predefinidos", default)]
    pub predefined: usize,
    #[serde(rename = "archivos_usuarios", default)]
    pub user_created: usize,
    #[serde(rename = "fecha_consulta", default)]
    pub queried_on: Option<SystemDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReadRequest {
    #[serde(rename = "nombre_archivo")]
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileWriteRequest {
    #[serde(rename = "nombre_archivo")]
    pub file_name: String,
    #[serde(rename = "contenido")]
    pub content: String,
    #[serde(rename = "autor")]
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCreateRequest {
    #[serde(rename = "nombre_archivo")]
    pub file_name: String,
    #[serde(rename = "contenido")]
    pub content: String,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FileCreateRequest {
    /// Default file kind used by the service.
    pub const DEFAULT_KIND: &'static str = "texto";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileContent {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "contenido")]
    pub content: String,
    pub metadata: FileMetadata,
    #[serde(rename = "estadisticas")]
    pub stats: ContentStats,
    #[serde(rename = "timestamp_lectura", default)]
    pub read_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "fecha_creacion")]
    pub created: SystemDate,
    #[serde(rename = "fecha_modificacion")]
    pub modified: SystemDate,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "solo_lectura", default)]
    pub read_only: bool,
    #[serde(rename = "origen", default)]
    pub origin: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStats {
    #[serde(rename = "tamaño_bytes", default)]
    pub size_bytes: u64,
    #[serde(rename = "lineas", default)]
    pub lines: u64,
    #[serde(rename = "caracteres", default)]
    pub characters: u64,
}

// ===== System =====

/// Response of `POST /system/loading`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadingStatus {
    #[serde(rename = "sistema_listo")]
    pub ready: bool,
    #[serde(rename = "tiempo_carga", default)]
    pub load_time: String,
    #[serde(rename = "mensajes_carga", default)]
    pub messages: Vec<String>,
    #[serde(rename = "estadisticas_iniciales", default)]
    pub initial_stats: serde_json::Value,
}

/// Response of `GET /system/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemStatus {
    pub timestamp: String,
    pub version: String,
    #[serde(rename = "modulos_cargados", default)]
    pub loaded_modules: Vec<String>,
    #[serde(rename = "usuario_actual", default)]
    pub current_user: serde_json::Value,
    #[serde(rename = "estadisticas_usuarios", default)]
    pub user_stats: serde_json::Value,
    #[serde(rename = "estadisticas_archivos", default)]
    pub file_stats: serde_json::Value,
    #[serde(rename = "fecha_sistema_tupla")]
    pub system_date: SystemDate,
    #[serde(rename = "configuraciones", default)]
    pub settings: serde_json::Value,
}

// ===== Reports =====

/// Sections to include in a generated report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRequest {
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "incluir_usuarios")]
    pub include_users: bool,
    #[serde(rename = "incluir_archivos")]
    pub include_files: bool,
    #[serde(rename = "incluir_fechas")]
    pub include_dates: bool,
    #[serde(rename = "incluir_estadisticas")]
    pub include_stats: bool,
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self {
            kind: "completo".to_string(),
            include_users: true,
            include_files: true,
            include_dates: true,
            include_stats: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedReport {
    #[serde(rename = "exito")]
    pub succeeded: bool,
    #[serde(rename = "reporte_markdown", default)]
    pub saved: Option<SavedReport>,
    #[serde(rename = "contenido_preview", default)]
    pub preview: Option<String>,
    #[serde(rename = "fecha_generacion", default)]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedReport {
    #[serde(rename = "nombre_archivo")]
    pub file_name: String,
    #[serde(rename = "ruta_completa", default)]
    pub path: String,
    #[serde(rename = "tamaño_bytes", default)]
    pub size_bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_date_from_tuple() {
        let date: SystemDate = serde_json::from_str("[28, 9, 2025]").unwrap();
        assert_eq!(date, SystemDate(28, 9, 2025));
        assert_eq!(date.to_string(), "28/09/2025");
    }

    #[test]
    fn test_date_request_uses_spanish_keys() {
        let body = serde_json::to_value(DateConfigRequest {
            day: 1,
            month: 2,
            year: 2026,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"dia": 1, "mes": 2, "año": 2026}));
    }

    #[test]
    fn test_create_request_omits_missing_description() {
        let body = serde_json::to_value(FileCreateRequest {
            file_name: "notas.txt".to_string(),
            content: "hola".to_string(),
            author: "ana".to_string(),
            kind: FileCreateRequest::DEFAULT_KIND.to_string(),
            description: None,
        })
        .unwrap();
        assert!(body.get("descripcion").is_none());
        assert_eq!(body["tipo"], "texto");
    }

    #[test]
    fn test_file_origin_wire_names() {
        let origin: FileOrigin = serde_json::from_str("\"usuario\"").unwrap();
        assert_eq!(origin, FileOrigin::User);
    }
}
