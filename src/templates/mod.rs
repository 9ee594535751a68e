//! Generated-artifact template sources.
//!
//! Handlebars templates rendered with HTML escaping disabled; the output is
//! JavaScript and HTML source for the target project, not markup to display.

/// Mongoose model module. One field line per entity field, in entry order.
pub const MODEL_TEMPLATE: &str = r"const mongoose = require('mongoose');

const {{entity}}Schema = new mongoose.Schema({
{{#each fields}}
  {{this.name}}: { type: {{this.storage_type}}, required: {{this.required}} },
{{/each}}
}{{#if timestamps}}, { timestamps: true }{{/if}});

module.exports = mongoose.model('{{entity}}', {{entity}}Schema);
";

/// Plain data class with no storage concerns attached.
pub const ENTITY_CLASS_TEMPLATE: &str = r"class {{entity}} {
  constructor({ {{field_list}} } = {}) {
{{#each fields}}
    this.{{this.name}} = {{this.name}};
{{/each}}
  }
}

module.exports = {{entity}};
";

/// CRUD controller composed from the project's shared CRUD behaviors.
///
/// The generated module passes the entity's model as the persistence
/// capability and may replace any individual operation via the overrides
/// object; the slots ship commented out.
pub const CONTROLLER_TEMPLATE: &str = r"const { createCrudController } = require('./CrudController');
const {{entity}} = require('../models/{{entity}}');

// {{entity}} handlers composed from the shared CRUD behaviors.
// Uncomment an override to replace the default implementation.
module.exports = createCrudController({{entity}}, {
  // create: async (req, res) => { ... },
  // read: async (req, res) => { ... },
  // update: async (req, res) => { ... },
  // delete: async (req, res) => { ... },
});
";

/// Express router with the four fixed CRUD endpoints.
pub const ROUTES_TEMPLATE: &str = r"const express = require('express');
const {{controller}} = require('../controllers/{{controller}}');

const router = express.Router();

// CRUD endpoints for the {{entity}} resource
router.post('/create', {{controller}}.create);
router.get('/get', {{controller}}.read);
router.put('/edit/:id', {{controller}}.update);
router.delete('/delete/:id', {{controller}}.delete);

module.exports = router;
";

/// Express router serving the generated HTML view.
pub const VIEW_ROUTES_TEMPLATE: &str = r"const express = require('express');
const path = require('path');

const router = express.Router();

// Serve the {{entity}} admin view
router.get('/page', (req, res) => {
  res.sendFile(path.resolve(__dirname, '../views/{{entity}}.html'));
});

module.exports = router;
";

/// Self-contained admin view: data table plus create modal, with fetch calls
/// against the generated API endpoints.
pub const VIEW_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{entity}} CRUD</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.1.3/dist/css/bootstrap.min.css" rel="stylesheet">
    <link href="https://cdn.datatables.net/1.11.5/css/jquery.dataTables.min.css" rel="stylesheet">
    <script src="https://code.jquery.com/jquery-3.6.0.min.js"></script>
    <script src="https://cdn.datatables.net/1.11.5/js/jquery.dataTables.min.js"></script>
    <script src="https://cdn.jsdelivr.net/npm/bootstrap@5.1.3/dist/js/bootstrap.bundle.min.js"></script>
    <script>
        $(document).ready(function() {
            $('#data-table').DataTable();
            fetchData();
        });

        async function fetchData() {
            const response = await fetch('/{{api_base}}/get');
            const data = await response.json();
            const tableBody = document.getElementById('data-body');
            tableBody.innerHTML = '';
            let i = 1;
            data.forEach(item => {
                const row = document.createElement('tr');
                row.innerHTML = `
                    <td>${i}</td>
{{table_cells}}
                    <td>
                        <button class="btn btn-primary" onclick="editItem('${item._id}')">Edit</button>
                        <button class="btn btn-danger" onclick="deleteItem('${item._id}')">Delete</button>
                    </td>
                `;
                tableBody.appendChild(row);
                i = i + 1;
            });
        }

        async function createItem(event) {
            event.preventDefault();
            const formData = new FormData(event.target);
            const response = await fetch('/{{api_base}}/create', {
                method: 'POST',
                body: JSON.stringify(Object.fromEntries(formData)),
                headers: {
                    'Content-Type': 'application/json'
                }
            });
            if (response.ok) {
                $('#createModal').modal('hide');
                document.getElementById('createForm').reset();
                fetchData();
            }
        }

        async function deleteItem(id) {
            const response = await fetch('/{{api_base}}/delete/' + id, {
                method: 'DELETE'
            });
            if (response.ok) {
                fetchData();
            }
        }

        function editItem(id) {
            alert('Edit functionality not implemented yet');
        }
    </script>
</head>
<body class="container">
    <h1 class="my-4">{{entity}} CRUD Operations</h1>

    <button class="btn btn-success mb-4" data-bs-toggle="modal" data-bs-target="#createModal">Create New {{entity}}</button>

    <table id="data-table" class="table table-striped table-bordered">
        <thead>
            <tr>
                <th>ID</th>
{{table_headers}}
                <th width='15%'>Actions</th>
            </tr>
        </thead>
        <tbody id="data-body"></tbody>
    </table>

    <!-- Modal for creating a new {{entity}} -->
    <div class="modal fade" id="createModal" tabindex="-1" aria-labelledby="createModalLabel" aria-hidden="true">
        <div class="modal-dialog">
            <div class="modal-content">
                <div class="modal-header">
                    <h5 class="modal-title" id="createModalLabel">Create New {{entity}}</h5>
                    <button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Close"></button>
                </div>
                <form onsubmit="createItem(event)" id="createForm">
                    <div class="modal-body">
{{form_fields}}
                    </div>
                    <div class="modal-footer">
                        <button type="submit" class="btn btn-primary">Create</button>
                        <button type="button" class="btn btn-secondary" data-bs-dismiss="modal">Cancel</button>
                    </div>
                </form>
            </div>
        </div>
    </div>
</body>
</html>
"##;
