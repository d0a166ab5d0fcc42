/*!

This is the long-form manual for `ballot_tally` and `liqconv`.

## Ballot sheets

A ballot sheet is the export of the spreadsheet in which the participants
entered their weights. The first row is the header:

```text
ID,P-Health,P-Edu,Econ
001,4.0,1,2.5
,Garbage,,
002,1.0,0,3.0
```

- the first cell of the header is a label and is ignored
- every other header cell is a tag. Tags starting with `P` are policies, the
  other tags are usually the identifiers of other voters (delegations)
- every following row starts with the identifier of a voter, followed by one
  number per tag
- rows without an identifier are dropped. Word processors and some
  spreadsheet exports insert such rows.

Any other irregularity (missing cell, text in a number cell) stops the
tabulation.

The following formats are supported for the sheet:
* `csv` Comma Separated Values (the default)
* `xlsx` Excel workbook. The first worksheet is used unless
  `--excel-worksheet-name` is given.

## Ballot documents

`liqconv tabulate` prints the ballot document:

```json
{
    "policies": [
        {
            "Short": "P-Health"
        },
        {
            "Short": "P-Edu"
        }
    ],
    "voters": [
        "001",
        "002"
    ],
    "votes": {
        "001": {
            "Econ": 2.5,
            "P-Edu": 1.0,
            "P-Health": 4.0
        },
        "002": {
            "Econ": 3.0,
            "P-Edu": 0.0,
            "P-Health": 1.0
        }
    }
}
```

Note that `votes` contains every tag of the header, not only the policies.

## Result reports

`liqconv report` reads the result file of the liquid democracy computation:

```json
{"output": {"influence": {"001": 1.5, "002": 1}, "votes": {"P-Health": 0.6, "(Blank)": 0.4}}}
```

and writes:

```text
voter, influence
001,1.5
002,1

policy, popularity
(Blank),0.4
P-Health,0.6
```

Each section is sorted on the text of its lines, not on the numbers.

## Configuration file

Instead of passing all the paths on the command line, they can be stored in a
JSON file given with `--config`:

```json
{
    "tabulate": {
        "inputPath": "pre_json.csv",
        "outputPath": "ballots.json"
    },
    "report": {
        "inputPath": "result.json",
        "outputPath": "result.csv"
    }
}
```

Relative paths are resolved against the directory of the configuration file.
Options given on the command line take precedence.

*/
