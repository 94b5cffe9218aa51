//! Minimales Command-Log für Diagnose und spätere Undo/Redo-Erweiterung.

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Debug)]
pub struct CommandLog<C> {
    entries: Vec<C>,
}

impl<C> CommandLog<C> {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    pub fn record(&mut self, command: C) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command);
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[C] {
        &self.entries
    }
}

impl<C> Default for CommandLog<C> {
    fn default() -> Self {
        Self::new()
    }
}
